use cipher_core::{CipherAlgorithm, CipherExt};
use rsa::rsa::{ExponentStrategy, PrimalityType, RsaCipher, RsaKeyGenerator};

fn main() {
    env_logger::init();

    // 1) Генерация ключей: Миллер–Рабин, доверие 0.9999, модуль 1024 бита
    let generator = RsaKeyGenerator::new(PrimalityType::MillerRabin, 0.9999, 1024);
    let cipher = RsaCipher::with_generator(&generator, 512).expect("key generation failed");

    let (e, n) = cipher.public_key();
    println!("Сгенерирован ключ:");
    println!("  n = {n}");
    println!("  |n| = {} бит, e = {e}", n.bits());
    println!(
        "  чанк открытого текста {} байт, чанк шифртекста {} байт",
        cipher.plaintext_chunk_size(),
        cipher.ciphertext_chunk_size()
    );

    // 2) Шифрование/дешифрование текста через адаптер
    let message = "Числа вместо букв";
    let encrypted = cipher.encrypt_text(message);
    let decrypted = cipher.decrypt_text(&encrypted).expect("decrypt failed");
    assert_eq!(decrypted, message);
    println!(
        "Шифрование→дешифрование успешно: {} байт текста → {} байт шифртекста",
        message.len(),
        encrypted.len()
    );

    // 3) Сырые байты: длина выхода кратна размеру чанка
    let payload: Vec<u8> = (1..=200).collect();
    let raw = cipher.encrypt(&payload);
    assert_eq!(raw.len() % cipher.ciphertext_chunk_size(), 0);
    assert_eq!(cipher.decrypt(&raw).expect("decrypt failed"), payload);
    println!("Байтовый прогон: {} → {} байт", payload.len(), raw.len());

    // 4) Наименьшая нечётная экспонента вместо 65537
    let generator = RsaKeyGenerator::new(PrimalityType::SolovayStrassen, 0.999, 256)
        .exponent_strategy(ExponentStrategy::SmallestOdd);
    let small = RsaCipher::with_generator(&generator, 16).expect("key generation failed");
    let (e_small, _) = small.public_key();
    println!("Наименьшая нечётная экспонента 256-битного ключа: e = {e_small}");
}
