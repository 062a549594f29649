pub mod cipher_io;
pub mod cipher_traits;
pub mod error;
pub mod padding;
