//! Single-block AES encryption and decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{AesError, Result};
use crate::round::{
    add_round_key, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows, sub_bytes,
};
use crate::schedule::KeySchedule;
use crate::state::State;
use crate::tables::{INV_MIX_COLUMNS_TABLES, MIX_COLUMNS_TABLES};

/// Single-block AES cipher over a pre-expanded key schedule.
///
/// The engine owns its schedule and holds no other state, so one instance can
/// serve concurrent calls from multiple threads. Each call copies its input
/// into a local working state; caller memory is never mutated.
#[derive(Clone)]
pub struct AesCipher {
    schedule: KeySchedule,
}

impl AesCipher {
    /// Creates a cipher from an already-validated key schedule.
    pub fn new(schedule: KeySchedule) -> Self {
        Self { schedule }
    }

    /// Creates a cipher directly from expanded key-schedule bytes.
    ///
    /// # Errors
    /// Returns [`AesError::ScheduleLength`] for lengths other than 176, 208,
    /// or 240 bytes.
    pub fn from_expanded_key(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(KeySchedule::new(bytes)?))
    }

    /// Number of rounds this cipher applies (10, 12, or 14).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// Encrypts one block.
    ///
    /// Input shorter than 16 bytes is zero-extended before processing;
    /// callers that need stricter framing or padded semantics enforce them
    /// externally.
    ///
    /// # Errors
    /// Returns [`AesError::BlockLength`] if `input` exceeds 16 bytes.
    pub fn encrypt_block(&self, input: &[u8]) -> Result<Block> {
        let mut state = load_state(input)?;
        let rounds = self.rounds();

        add_round_key(&mut state, self.schedule.round_key(0));
        for round in 1..rounds {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state, &MIX_COLUMNS_TABLES);
            add_round_key(&mut state, self.schedule.round_key(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.schedule.round_key(rounds));

        Ok(state.into_block())
    }

    /// Decrypts one block, undoing [`AesCipher::encrypt_block`].
    ///
    /// Round keys are applied in reverse order. In the intermediate rounds
    /// the round key is added before the inverse column mix; MixColumns and
    /// AddRoundKey do not commute, so this ordering is what makes the inverse
    /// exact. Short input is zero-extended as in encryption.
    ///
    /// # Errors
    /// Returns [`AesError::BlockLength`] if `input` exceeds 16 bytes.
    pub fn decrypt_block(&self, input: &[u8]) -> Result<Block> {
        let mut state = load_state(input)?;
        let rounds = self.rounds();

        add_round_key(&mut state, self.schedule.round_key(rounds));
        for round in (1..rounds).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.schedule.round_key(round));
            mix_columns(&mut state, &INV_MIX_COLUMNS_TABLES);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.schedule.round_key(0));

        Ok(state.into_block())
    }
}

fn load_state(input: &[u8]) -> Result<State> {
    if input.len() > BLOCK_SIZE {
        return Err(AesError::BlockLength(input.len()));
    }
    let mut block: Block = [0u8; BLOCK_SIZE];
    block[..input.len()].copy_from_slice(input);
    Ok(State::from_block(block))
}
