use cipher_core::crypto::padding;
use cipher_core::{CipherAlgorithm, CipherError};

use crate::crypto::des_tables::{IIP, IP};
use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::derive_subkeys;
use crate::crypto::permutation::permute;

pub const BLOCK_SIZE: usize = 8;

/// 64-bit Feistel block cipher with 16 rounds.
///
/// The subkey schedule is derived once at construction and never mutated,
/// so a single instance can serve concurrent encrypt/decrypt calls.
pub struct DesCipher {
    subkeys: [u64; 16],
}

impl DesCipher {
    /// Only 56 bits of the master key are effective: the parity positions
    /// are dropped by the first key-schedule permutation.
    pub fn new(master_key: u64) -> Self {
        DesCipher {
            subkeys: derive_subkeys(master_key),
        }
    }

    /// Encrypts a single 64-bit block.
    pub fn encrypt_block(&self, block: u64) -> u64 {
        let permuted = permute(block, 64, &IP);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for &subkey in &self.subkeys {
            let new_right = left ^ round_function(right, subkey);
            left = right;
            right = new_right;
        }

        // The halves recombine swapped, right before left.
        let preoutput = (u64::from(right) << 32) | u64::from(left);
        permute(preoutput, 64, &IIP)
    }

    /// Decrypts a single 64-bit block: the same network with the subkeys
    /// consumed in reverse order and the same permutation pair.
    pub fn decrypt_block(&self, block: u64) -> u64 {
        let permuted = permute(block, 64, &IP);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        for &subkey in self.subkeys.iter().rev() {
            let new_right = left ^ round_function(right, subkey);
            left = right;
            right = new_right;
        }

        let preoutput = (u64::from(right) << 32) | u64::from(left);
        permute(preoutput, 64, &IIP)
    }
}

impl CipherAlgorithm for DesCipher {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let padded = padding::pad(data, BLOCK_SIZE);
        let mut encrypted = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            // Blocks pack little-endian: byte 0 is the least significant.
            let block = u64::from_le_bytes(chunk.try_into().unwrap());
            encrypted.extend_from_slice(&self.encrypt_block(block).to_le_bytes());
        }
        encrypted
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidLength {
                length: data.len(),
                block_size: BLOCK_SIZE,
            });
        }

        let mut decrypted = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_SIZE) {
            let block = u64::from_le_bytes(chunk.try_into().unwrap());
            decrypted.extend_from_slice(&self.decrypt_block(block).to_le_bytes());
        }
        padding::unpad(&decrypted, BLOCK_SIZE)
    }
}
