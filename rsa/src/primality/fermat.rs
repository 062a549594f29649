use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

/// Тест Ферма: a^(n-1) ≡ 1 (mod n) для случайного a
pub struct FermatTest;

impl PrimalityTest for FermatTest {
    fn witness_round(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = &one + &one;

        if *n < two {
            return false;
        }
        if *n <= BigUint::from(3u8) {
            return true; // 2 и 3 — простые
        }

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &(n - &one));

        mod_pow(&a, &(n - &one), n) == one
    }
}
