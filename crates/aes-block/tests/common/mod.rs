//! Test-only key expansion.
//!
//! The crate under test consumes pre-expanded schedules, so the tests
//! manufacture them here. The S-box is derived from the field definition
//! (inversion plus affine map) instead of repeating the crate's table.

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

/// x^254, i.e. the multiplicative inverse in GF(2^8), with 0 mapped to 0.
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);
    y
}

fn sbox_byte(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox_byte))
}

/// Expands a 16-, 24-, or 32-byte cipher key into the full round-key
/// schedule (FIPS-197 §5.2).
pub fn expand_key(key: &[u8]) -> Vec<u8> {
    let nk = key.len() / 4;
    assert!(
        key.len() % 4 == 0 && matches!(nk, 4 | 6 | 8),
        "cipher key must be 16, 24, or 32 bytes"
    );
    let nr = nk + 6;
    let total_words = 4 * (nr + 1);

    let mut w = vec![0u32; total_words];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(chunk.try_into().expect("chunk length is four"));
    }
    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    w.iter().flat_map(|word| word.to_be_bytes()).collect()
}
