use crate::number_theory::{jacobi_symbol, mod_pow};
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

/// Тест Соловея–Штрассена: сверяет символ Якоби с критерием Эйлера
pub struct SolovayStrassenTest;

impl PrimalityTest for SolovayStrassenTest {
    fn witness_round(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);

        if *n < two {
            return false;
        }
        if *n == two || *n == BigUint::from(3u8) {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let mut rng = thread_rng();
        let upper = n - &one;
        let a = rng.gen_biguint_range(&two, &upper);

        let jacobi = jacobi_symbol(&a.to_bigint().unwrap(), &n.to_bigint().unwrap());
        if jacobi == 0 {
            return false;
        }

        // критерий Эйлера: a^((n-1)/2) ≡ (a|n) (mod n)
        let x = mod_pow(&a, &(&upper >> 1), n);
        let expected = if jacobi == 1 { one } else { upper };

        x == expected
    }
}
