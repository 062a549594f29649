use cipher_core::{CipherAlgorithm, CipherError, CipherExt};
use num_bigint::BigUint;
use num_traits::FromPrimitive;
use rsa::rsa::{PrimalityType, RsaCipher, RsaKeyGenerator, RsaKeyPair};

fn small_cipher() -> RsaCipher {
    let generator = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    RsaCipher::with_generator(&generator, 64).unwrap()
}

#[test]
fn test_chunk_sizes_for_kilobit_key() {
    let cipher = RsaCipher::new(1024, 512).unwrap();

    // 1024-битный модуль: 127 байт открытого текста, 128 + 1 байт шифртекста
    assert_eq!(cipher.plaintext_chunk_size(), 127);
    assert_eq!(cipher.ciphertext_chunk_size(), 129);
}

#[test]
fn test_short_message_fills_one_chunk() {
    let cipher = RsaCipher::new(1024, 512).unwrap();
    let message = b"Hello World!";

    let encrypted = cipher.encrypt(message);
    assert_eq!(encrypted.len(), 129);

    let decrypted = cipher.decrypt(&encrypted).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn test_multi_chunk_roundtrip() {
    let cipher = small_cipher();
    assert_eq!(cipher.plaintext_chunk_size(), 7);
    assert_eq!(cipher.ciphertext_chunk_size(), 9);

    let data: Vec<u8> = (1..=20).collect();
    let encrypted = cipher.encrypt(&data);
    assert_eq!(encrypted.len(), 27); // 3 чанка по 9 байт

    assert_eq!(cipher.decrypt(&encrypted).unwrap(), data);
}

#[test]
fn test_empty_input() {
    let cipher = small_cipher();
    assert!(cipher.encrypt(&[]).is_empty());
    assert_eq!(cipher.decrypt(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_decrypt_rejects_truncated_ciphertext() {
    let cipher = small_cipher();
    let encrypted = cipher.encrypt(&[1, 2, 3, 4, 5]);
    assert_eq!(encrypted.len(), 9);

    let result = cipher.decrypt(&encrypted[..8]);
    assert_eq!(
        result,
        Err(CipherError::InvalidLength {
            length: 8,
            block_size: 9,
        })
    );
}

#[test]
fn test_leading_zero_bytes_are_lost() {
    // известное ограничение кодека: чанк восстанавливается как минимальная
    // запись числа, ведущие нулевые байты не возвращаются
    let cipher = small_cipher();

    let decrypted = cipher.decrypt(&cipher.encrypt(&[0, 65])).unwrap();
    assert_eq!(decrypted, vec![65]);

    let all_zeros = cipher.decrypt(&cipher.encrypt(&[0, 0, 0])).unwrap();
    assert!(all_zeros.is_empty());
}

#[test]
fn test_configured_block_size_caps_chunk() {
    let generator = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.99, 64);
    let pair = generator.generate_keypair().unwrap();
    let cipher = RsaCipher::from_key_pair(pair, 3).unwrap();

    assert_eq!(cipher.plaintext_chunk_size(), 3);

    let data: Vec<u8> = (1..=10).collect();
    assert_eq!(cipher.decrypt(&cipher.encrypt(&data)).unwrap(), data);
}

#[test]
fn test_modulus_too_small_for_one_byte() {
    // n = 11 * 13 = 143 — меньше восьми бит на чанк
    let pair = RsaKeyPair::from_primes(
        BigUint::from_u32(11).unwrap(),
        BigUint::from_u32(13).unwrap(),
        BigUint::from_u32(7).unwrap(),
    )
    .unwrap();

    let result = RsaCipher::from_key_pair(pair, 64);
    assert!(matches!(result, Err(CipherError::InvalidKeyParameters(_))));
}

#[test]
fn test_encrypt_deterministic() {
    let cipher = small_cipher();
    let data = b"deterministic without padding";
    assert_eq!(cipher.encrypt(data), cipher.encrypt(data));
}

#[test]
fn test_text_adapter_roundtrip() {
    let cipher = small_cipher();
    let message = "Числа вместо букв: RSA 🔐";

    let encrypted = cipher.encrypt_text(message);
    assert_eq!(encrypted.len() % cipher.ciphertext_chunk_size(), 0);
    assert_eq!(cipher.decrypt_text(&encrypted).unwrap(), message);
}

#[test]
fn test_key_accessors_are_consistent() {
    let cipher = small_cipher();
    let (e, n) = cipher.public_key();
    let (d, n2) = cipher.private_key();

    assert_eq!(n, n2);
    assert_eq!(e, BigUint::from_u32(65537).unwrap());

    // шифрование чужим значением и ручная расшифровка ключами из аксессоров
    let m = BigUint::from_u32(99).unwrap();
    let c = m.modpow(&e, &n);
    assert_eq!(c.modpow(&d, &n), m);
}

use quickcheck::quickcheck;

quickcheck! {
    fn prop_roundtrip_without_zero_bytes(data: Vec<u8>) -> bool {
        if data.iter().any(|b| *b == 0) {
            return true; // ведущие нули теряются по построению кодека
        }
        let cipher = small_cipher();
        cipher.decrypt(&cipher.encrypt(&data)).unwrap() == data
    }
}
