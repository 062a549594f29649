use crate::crypto::des_tables::{PC1, PC2, SHIFTS};
use crate::crypto::permutation::permute;

const HALF_MASK: u32 = 0x0FFF_FFFF;

/// Derives the 16 round subkeys, round 0 first.
///
/// PC-1 reduces the master key 64 -> 56 bits, the halves C and D rotate
/// left independently by the per-round schedule amount, and PC-2
/// compresses the rejoined 56 bits to a 48-bit subkey. This is the only
/// place master-key bits are consumed.
pub fn derive_subkeys(master_key: u64) -> [u64; 16] {
    let reduced = permute(master_key, 64, &PC1);
    let mut c = ((reduced >> 28) as u32) & HALF_MASK;
    let mut d = (reduced as u32) & HALF_MASK;

    let mut subkeys = [0u64; 16];
    for (subkey, &shift) in subkeys.iter_mut().zip(SHIFTS.iter()) {
        c = rotate_left_28(c, shift);
        d = rotate_left_28(d, shift);
        let rejoined = (u64::from(c) << 28) | u64::from(d);
        *subkey = permute(rejoined, 56, &PC2);
    }
    subkeys
}

/// 28-bit left rotation; bits above the half width stay clear.
fn rotate_left_28(half: u32, shift: u32) -> u32 {
    ((half << shift) | (half >> (28 - shift))) & HALF_MASK
}
