use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

/// Тест Миллера–Рабина
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
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

        // n - 1 = d * 2^s, d нечётное
        let n_minus_one = n - &one;
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let d = &n_minus_one >> s;

        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);

        if x == one || x == n_minus_one {
            return true;
        }

        for _ in 1..s {
            x = (&x * &x) % n;

            if x == n_minus_one {
                return true;
            }
            if x == one {
                return false;
            }
        }

        false
    }
}
