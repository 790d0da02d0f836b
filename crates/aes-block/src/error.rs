//! Error types for schedule and block validation.

use thiserror::Error;

/// Errors reported by this crate.
///
/// All conditions are deterministic functions of the inputs and are reported
/// synchronously; there are no transient failures to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AesError {
    /// The expanded key schedule does not match any supported round count.
    /// Valid lengths are 176, 208, and 240 bytes (10, 12, and 14 rounds).
    #[error("expanded key schedule must be 176, 208, or 240 bytes, got {0}")]
    ScheduleLength(usize),
    /// The block input is longer than 16 bytes.
    #[error("block input must be at most 16 bytes, got {0}")]
    BlockLength(usize),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AesError>;
