pub mod crypto;

pub use crypto::cipher_traits::{CipherAlgorithm, CipherExt};
pub use crypto::error::CipherError;
