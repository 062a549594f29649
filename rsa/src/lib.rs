pub mod number_theory;
pub mod primality;
pub mod rsa;
