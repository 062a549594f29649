pub mod crypto;

pub use crypto::des::DesCipher;
