use std::fs;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use cipher_core::CipherExt;
use des::crypto::des::DesCipher;
use des::crypto::key_schedule::derive_subkeys;

fn main() -> std::io::Result<()> {
    env_logger::init();

    // --------------------------------------------------------
    // 0) Key schedule demo
    // --------------------------------------------------------
    println!("=== Key schedule demo ===");
    let key: u64 = 2019216864;
    let subkeys = derive_subkeys(key);
    println!(" First subkey: {:012x}", subkeys[0]);
    println!(" Last subkey:  {:012x}", subkeys[15]);

    // --------------------------------------------------------
    // 1) Single-block demo
    // --------------------------------------------------------
    println!("\n=== Single block demo ===");
    let cipher = DesCipher::new(key);
    let block: u64 = 0x0123_4567_89AB_CDEF;
    let encrypted_block = cipher.encrypt_block(block);
    println!(" Plaintext block: {:016x}", block);
    println!(" Encrypted block: {:016x}", encrypted_block);
    println!(" Decrypted block: {:016x}", cipher.decrypt_block(encrypted_block));
    assert_eq!(cipher.decrypt_block(encrypted_block), block);

    // --------------------------------------------------------
    // 2) Text demo
    // --------------------------------------------------------
    println!("\n=== Text demo ===");
    let message = "Hello World!";
    let ciphertext = cipher.encrypt_text(message);
    println!(" \"{}\" -> {} bytes: {:02x?}", message, ciphertext.len(), ciphertext);
    let restored = cipher.decrypt_text(&ciphertext).unwrap();
    println!(" Restored: \"{}\"", restored);
    assert_eq!(restored, message);

    // --------------------------------------------------------
    // 3) File demo
    // --------------------------------------------------------
    println!("\n=== File demo ===");
    let dir = tempfile::tempdir()?;
    let plain_path = dir.path().join("sample.bin");
    let encrypted_path = dir.path().join("sample.enc");
    let restored_path = dir.path().join("sample.out");

    let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
    let mut payload = vec![0u8; 64 * 1024];
    rng.fill_bytes(&mut payload);
    fs::write(&plain_path, &payload)?;

    cipher.encrypt_file(&plain_path, &encrypted_path)?;
    cipher.decrypt_file(&encrypted_path, &restored_path)?;

    let restored = fs::read(&restored_path)?;
    assert_eq!(restored, payload);
    println!(
        " {} bytes -> {} bytes -> {} bytes OK",
        payload.len(),
        fs::metadata(&encrypted_path)?.len(),
        restored.len()
    );

    Ok(())
}
