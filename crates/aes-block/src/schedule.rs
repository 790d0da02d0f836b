//! Validated storage for a pre-expanded round-key schedule.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{AesError, Result};

/// An expanded AES key schedule, split into 16-byte round keys.
///
/// The schedule is produced by an external key-expansion routine; this type
/// only validates its length and serves per-round slices. A schedule of
/// `16 * (Nr + 1)` bytes drives `Nr` rounds, with `Nr` one of 10, 12, or 14
/// (128-, 192-, and 256-bit keys respectively). The key material is wiped
/// from memory when the schedule is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: Vec<Block>,
}

impl KeySchedule {
    /// Validates and takes ownership of an expanded key schedule.
    ///
    /// # Errors
    /// Returns [`AesError::ScheduleLength`] unless `bytes` is exactly 176,
    /// 208, or 240 bytes long.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            176 | 208 | 240 => {}
            other => return Err(AesError::ScheduleLength(other)),
        }
        let round_keys = bytes
            .chunks_exact(BLOCK_SIZE)
            .map(|chunk| chunk.try_into().expect("chunk length is sixteen"))
            .collect();
        Ok(Self { round_keys })
    }

    /// Number of cipher rounds this schedule drives (10, 12, or 14).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Returns the round key for `round` (0 ..= `rounds()`).
    #[inline]
    pub(crate) fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }
}
