pub mod keygen;
pub mod rsa;

pub use keygen::{ExponentStrategy, PrimalityType, RsaKeyGenerator, RsaKeyPair};
pub use rsa::RsaCipher;
