use cipher_core::{CipherAlgorithm, CipherError};
use num_bigint::BigUint;

use crate::number_theory::mod_pow;
use crate::rsa::keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};

const DEFAULT_CONFIDENCE: f64 = 0.9999;

/// Блочный шифратор поверх пары ключей RSA: вход режется на чанки,
/// каждый чанк шифруется как беззнаковое big-endian число по модулю n.
pub struct RsaCipher {
    key_pair: RsaKeyPair,
    plaintext_chunk_size: usize,
    ciphertext_chunk_size: usize,
}

impl RsaCipher {
    /// Генерирует свежую пару ключей (Миллер–Рабин, e = 65537)
    pub fn new(bit_length: usize, block_size: usize) -> Result<Self, CipherError> {
        let generator =
            RsaKeyGenerator::new(PrimalityType::MillerRabin, DEFAULT_CONFIDENCE, bit_length);
        Self::with_generator(&generator, block_size)
    }

    /// Генерирует пару ключей настроенным генератором
    pub fn with_generator(
        generator: &RsaKeyGenerator,
        block_size: usize,
    ) -> Result<Self, CipherError> {
        Self::from_key_pair(generator.generate_keypair()?, block_size)
    }

    /// Оборачивает готовую пару ключей.
    ///
    /// Чанк открытого текста — min((bits - 1) / 8, block_size) байт, чтобы
    /// любое его числовое значение было строго меньше модуля; чанк
    /// шифртекста — ceil(bits / 8) + 1 байт. Модуль, не вмещающий даже один
    /// байт, отвергается.
    pub fn from_key_pair(key_pair: RsaKeyPair, block_size: usize) -> Result<Self, CipherError> {
        let bits = key_pair.n.bits() as usize;
        let plaintext_chunk_size = ((bits - 1) / 8).min(block_size);
        if plaintext_chunk_size == 0 {
            return Err(CipherError::InvalidKeyParameters(
                "modulus too small to carry a single plaintext byte",
            ));
        }
        let ciphertext_chunk_size = (bits + 7) / 8 + 1;

        Ok(Self {
            key_pair,
            plaintext_chunk_size,
            ciphertext_chunk_size,
        })
    }

    /// Открытый ключ (e, n)
    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.key_pair.e.clone(), self.key_pair.n.clone())
    }

    /// Закрытый ключ (d, n)
    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.key_pair.d.clone(), self.key_pair.n.clone())
    }

    pub fn plaintext_chunk_size(&self) -> usize {
        self.plaintext_chunk_size
    }

    pub fn ciphertext_chunk_size(&self) -> usize {
        self.ciphertext_chunk_size
    }
}

impl CipherAlgorithm for RsaCipher {
    /// Шифрует произвольные байты; пустой вход даёт пустой выход.
    /// Каждый чанк шифртекста дополняется нулями слева до фиксированной длины.
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut output = Vec::new();
        for chunk in data.chunks(self.plaintext_chunk_size) {
            let m = BigUint::from_bytes_be(chunk);
            let c = mod_pow(&m, &self.key_pair.e, &self.key_pair.n);
            let bytes = c.to_bytes_be();
            output.extend(vec![0u8; self.ciphertext_chunk_size - bytes.len()]);
            output.extend_from_slice(&bytes);
        }
        output
    }

    /// Дешифрует конкатенацию чанков фиксированной длины.
    ///
    /// Известное ограничение: чанк восстанавливается как минимальная запись
    /// числа, поэтому ведущие нулевые байты исходного чанка теряются.
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.len() % self.ciphertext_chunk_size != 0 {
            return Err(CipherError::InvalidLength {
                length: data.len(),
                block_size: self.ciphertext_chunk_size,
            });
        }

        let mut output = Vec::new();
        for chunk in data.chunks_exact(self.ciphertext_chunk_size) {
            let c = BigUint::from_bytes_be(chunk);
            let m = mod_pow(&c, &self.key_pair.d, &self.key_pair.n);
            let bytes = m.to_bytes_be();
            // ведущий ноль — артефакт записи, не байт открытого текста
            match bytes.split_first() {
                Some((0, rest)) => output.extend_from_slice(rest),
                _ => output.extend_from_slice(&bytes),
            }
        }
        Ok(output)
    }
}
