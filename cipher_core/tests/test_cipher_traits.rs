use cipher_core::{CipherAlgorithm, CipherError, CipherExt};

/// Шифр-заглушка: инвертирует каждый байт, чтобы обёртки было видно насквозь.
struct MirrorCipher;

impl CipherAlgorithm for MirrorCipher {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        data.iter().map(|b| !b).collect()
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.first() == Some(&0xFF) {
            // 0xFF в начале объявлен «битым» входом, чтобы проверить ветку ошибки
            return Err(CipherError::MalformedPadding);
        }
        Ok(data.iter().map(|b| !b).collect())
    }
}

#[test]
fn test_text_round_trip_through_adapter() {
    let cipher = MirrorCipher;
    let encrypted = cipher.encrypt_text("Просто текст, just text");
    let decrypted = cipher.decrypt_text(&encrypted).unwrap();
    assert_eq!(decrypted, "Просто текст, just text");
}

#[test]
fn test_decrypt_text_replaces_invalid_utf8() {
    let cipher = MirrorCipher;
    // После инверсии получится 0xFE — не начало корректной UTF-8 последовательности.
    let decrypted = cipher.decrypt_text(&[!0xFEu8]).unwrap();
    assert_eq!(decrypted, "\u{FFFD}");
}

#[test]
fn test_file_round_trip_through_adapter() {
    let dir = tempfile::tempdir().unwrap();
    let plain_path = dir.path().join("plain.bin");
    let encrypted_path = dir.path().join("encrypted.bin");
    let restored_path = dir.path().join("restored.bin");

    let payload: Vec<u8> = (1u8..=200).collect();
    std::fs::write(&plain_path, &payload).unwrap();

    let cipher = MirrorCipher;
    cipher.encrypt_file(&plain_path, &encrypted_path).unwrap();
    cipher.decrypt_file(&encrypted_path, &restored_path).unwrap();

    assert_eq!(std::fs::read(&restored_path).unwrap(), payload);
    assert_ne!(std::fs::read(&encrypted_path).unwrap(), payload);
}

#[test]
fn test_decrypt_file_maps_cipher_error_to_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let broken_path = dir.path().join("broken.bin");
    let out_path = dir.path().join("out.bin");
    std::fs::write(&broken_path, [0xFFu8, 1, 2, 3]).unwrap();

    let err = MirrorCipher
        .decrypt_file(&broken_path, &out_path)
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert!(!out_path.exists());
}

#[test]
fn test_adapter_works_through_trait_object() {
    let cipher: Box<dyn CipherAlgorithm> = Box::new(MirrorCipher);
    let encrypted = cipher.encrypt_text("dyn");
    assert_eq!(cipher.decrypt_text(&encrypted).unwrap(), "dyn");
}
