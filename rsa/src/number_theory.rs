use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Наибольший общий делитель по алгоритму Евклида
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// Расширенный алгоритм Евклида: возвращает (g, x, y) такие что a*x + b*y = g
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }
    // g = b*x + (a mod b)*y = a*y + b*(x - (a/b)*y)
    let (g, x, y) = extended_gcd(b, &(a % b));
    let q = a / b;
    (g, y.clone(), x - q * y)
}

/// Возведение в степень по модулю: base^exponent mod modulus.
/// Нулевой модуль даёт ноль.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let base = base % modulus;
    let mut result = BigUint::one() % modulus;

    // бинарный метод, от старшего бита к младшему
    for bit in (0..exponent.bits()).rev() {
        result = (&result * &result) % modulus;
        if exponent.bit(bit) {
            result = (&result * &base) % modulus;
        }
    }
    result
}

/// Символ Якоби (a|n), n — нечётное положительное
pub fn jacobi_symbol(a: &BigInt, n: &BigInt) -> i32 {
    if !n.is_positive() || n.is_even() {
        panic!("n must be an odd positive integer");
    }

    let mut a = a.mod_floor(n);
    let mut n = n.clone();
    let mut sign = 1;

    while !a.is_zero() {
        while a.is_even() {
            a >>= 1;
            // (2|n) = -1 при n ≡ 3, 5 (mod 8)
            let n_mod_8 = (&n % 8u8).to_u8().unwrap();
            if n_mod_8 == 3 || n_mod_8 == 5 {
                sign = -sign;
            }
        }

        std::mem::swap(&mut a, &mut n);
        // квадратичная взаимность
        if &a % 4u8 == BigInt::from(3) && &n % 4u8 == BigInt::from(3) {
            sign = -sign;
        }
        a %= &n;
    }

    if n.is_one() {
        sign
    } else {
        0
    }
}
