//! AES round transformations.
//!
//! Each function is stateless and rewrites a 16-byte [`State`] in place.

use crate::block::{xor_in_place, Block};
use crate::state::State;
use crate::tables::{GaloisTables, INV_SBOX, SBOX};

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = SBOX[usize::from(*byte)];
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = INV_SBOX[usize::from(*byte)];
    }
}

#[inline]
fn rotate_left(row: [u8; 4], n: usize) -> [u8; 4] {
    [
        row[n % 4],
        row[(n + 1) % 4],
        row[(n + 2) % 4],
        row[(n + 3) % 4],
    ]
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
/// Row 0 is never rotated.
#[inline]
pub(crate) fn shift_rows(state: &mut State) {
    for r in 1..4 {
        state.set_row(r, rotate_left(state.row(r), r));
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        state.set_row(r, rotate_left(state.row(r), 4 - r));
    }
}

/// Multiplies every column by the MixColumns matrix encoded in `tables`.
///
/// `tables` holds one lookup table per matrix coefficient; passing the
/// forward set computes MixColumns and the inverse set undoes it. Each output
/// byte is four table lookups XORed together, with the coefficient order
/// rotating by one position per row of the column.
#[inline]
pub(crate) fn mix_columns(state: &mut State, tables: &GaloisTables) {
    let [g0, g1, g2, g3] = tables;
    for c in 0..4 {
        let [c0, c1, c2, c3] = state.column(c).map(usize::from);
        state.set_column(
            c,
            [
                g0[c0] ^ g1[c1] ^ g2[c2] ^ g3[c3],
                g3[c0] ^ g0[c1] ^ g1[c2] ^ g2[c3],
                g2[c0] ^ g3[c1] ^ g0[c2] ^ g1[c3],
                g1[c0] ^ g2[c1] ^ g3[c2] ^ g0[c3],
            ],
        );
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut State, round_key: &Block) {
    xor_in_place(state.bytes_mut(), round_key);
}
