//! Single-block AES cipher and decipher per FIPS-197.
//!
//! This crate implements the computational core of AES: the four round
//! transformations (SubBytes, ShiftRows, MixColumns, AddRoundKey) composed
//! into the round sequence for 128-, 192-, and 256-bit keys. It consumes an
//! already-expanded round-key schedule and provides:
//! - [`KeySchedule`], validated round-key storage wiped on drop.
//! - [`AesCipher`], single-block encryption and decryption.
//!
//! Key expansion, modes of operation (ECB/CBC/CTR/GCM), padding schemes, and
//! any I/O surface are the caller's responsibility. The implementation aims
//! for clarity and testability rather than constant-time guarantees; it uses
//! table lookups and should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod round;
mod schedule;
mod state;
mod tables;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::AesCipher;
pub use crate::error::{AesError, Result};
pub use crate::schedule::KeySchedule;
