use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::permutation::permute;

/// The Feistel round function: expansion, subkey mixing, substitution and
/// the round permutation. Deterministic, no failure mode.
pub fn round_function(right: u32, subkey: u64) -> u32 {
    let expanded = permute(u64::from(right), 32, &E);
    let mixed = expanded ^ subkey;
    permute(u64::from(substitute(mixed)), 32, &P) as u32
}

/// Compresses 48 bits to 32 through the eight S-boxes. Each 6-bit group
/// picks a row with its outer bits (bit 5 and bit 0) and a column with the
/// middle four bits.
fn substitute(value: u64) -> u32 {
    let mut output = 0u32;
    for (box_index, sbox) in S_BOXES.iter().enumerate() {
        let group = ((value >> (42 - 6 * box_index)) & 0x3F) as usize;
        let row = ((group >> 4) & 0b10) | (group & 0b01);
        let column = (group >> 1) & 0x0F;
        output = (output << 4) | u32::from(sbox[row * 16 + column]);
    }
    output
}
