use cipher_core::CipherError;
use log::{debug, info};
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::One;
use rand::thread_rng;

use crate::number_theory::{extended_gcd, gcd};
use crate::primality::{FermatTest, MillerRabinTest, PrimalityTest, SolovayStrassenTest};

/// Выбор теста простоты
pub enum PrimalityType {
    Fermat,
    SolovayStrassen,
    MillerRabin,
}

impl PrimalityType {
    fn instantiate(&self) -> Box<dyn PrimalityTest> {
        match self {
            PrimalityType::Fermat => Box::new(FermatTest),
            PrimalityType::SolovayStrassen => Box::new(SolovayStrassenTest),
            PrimalityType::MillerRabin => Box::new(MillerRabinTest),
        }
    }
}

/// Способ выбора открытой экспоненты
pub enum ExponentStrategy {
    /// Классическое e = 65537
    Fixed65537,
    /// Наименьшее нечётное e ≥ 3, взаимно простое с φ(n)
    SmallestOdd,
}

impl ExponentStrategy {
    fn select(&self, phi: &BigUint) -> BigUint {
        match self {
            ExponentStrategy::Fixed65537 => BigUint::from(65_537u32),
            ExponentStrategy::SmallestOdd => {
                let one = BigUint::one();
                let mut e = BigUint::from(3u8);
                while gcd(&e, phi) != one {
                    e += 2u8;
                }
                e
            }
        }
    }
}

/// Структура открытого и закрытого ключа RSA
pub struct RsaKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    /// Строит пару ключей по известным простым p, q и экспоненте e.
    ///
    /// Совпадающие простые и экспонента, не взаимно простая с φ(n),
    /// отвергаются как `InvalidKeyParameters`; перебора заново нет.
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> Result<Self, CipherError> {
        let one = BigUint::one();
        if p <= one || q <= one {
            return Err(CipherError::InvalidKeyParameters(
                "prime factors must be at least 2",
            ));
        }
        if p == q {
            return Err(CipherError::InvalidKeyParameters(
                "prime factors must be distinct",
            ));
        }

        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);
        if gcd(&e, &phi) != one {
            return Err(CipherError::InvalidKeyParameters(
                "public exponent is not coprime to the totient",
            ));
        }

        // d = e^(-1) mod φ(n), коэффициент Безу приводится в [0, φ)
        let phi_int = phi.to_bigint().unwrap();
        let (_, x, _) = extended_gcd(&e.to_bigint().unwrap(), &phi_int);
        let d = (((x % &phi_int) + &phi_int) % &phi_int).to_biguint().unwrap();

        Ok(Self { n, e, d, p, q })
    }

    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

/// Сервис генерации ключей RSA
pub struct RsaKeyGenerator {
    test_type: PrimalityType,
    confidence: f64,
    bit_length: usize,
    exponent: ExponentStrategy,
}

impl RsaKeyGenerator {
    /// Создание нового генератора с экспонентой e = 65537
    pub fn new(test_type: PrimalityType, confidence: f64, bit_length: usize) -> Self {
        Self {
            test_type,
            confidence,
            bit_length,
            exponent: ExponentStrategy::Fixed65537,
        }
    }

    /// Заменяет способ выбора открытой экспоненты
    pub fn exponent_strategy(mut self, strategy: ExponentStrategy) -> Self {
        self.exponent = strategy;
        self
    }

    /// Генерация пары ключей RSA.
    ///
    /// Первое простое тянется на bit_length - bit_length/2 бит, второе
    /// на bit_length/2, оба со взведённым старшим битом, так что модуль
    /// нечётной длины тоже достижим; пара перетягивается только пока
    /// модуль короче bit_length. Ложное срабатывание вероятностного
    /// теста — принятый остаточный риск, повторной проверки нет.
    pub fn generate_keypair(&self) -> Result<RsaKeyPair, CipherError> {
        let test = self.test_type.instantiate();
        let one = BigUint::one();
        // первое простое берёт лишний бит при нечётной длине
        let p_bits = (self.bit_length - self.bit_length / 2).max(2);
        let q_bits = (self.bit_length / 2).max(2);
        let mut rng = thread_rng();

        loop {
            let p = self.draw_prime(&mut rng, test.as_ref(), p_bits);
            let q = self.draw_prime(&mut rng, test.as_ref(), q_bits);

            let n = &p * &q;
            if n.bits() < self.bit_length as u64 {
                debug!("modulus came out {} bits, redrawing the pair", n.bits());
                continue;
            }

            let phi = (&p - &one) * (&q - &one);
            let e = self.exponent.select(&phi);
            let pair = RsaKeyPair::from_primes(p, q, e)?;
            info!("generated {}-bit modulus, e = {}", pair.n.bits(), pair.e);
            return Ok(pair);
        }
    }

    fn draw_prime(
        &self,
        rng: &mut rand::rngs::ThreadRng,
        test: &dyn PrimalityTest,
        bits: usize,
    ) -> BigUint {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let mut candidate = rng.gen_biguint(bits as u64);
            candidate.set_bit(bits as u64 - 1, true);
            if test.is_probably_prime(&candidate, self.confidence) {
                debug!("{}-bit probable prime after {} candidates", bits, attempts);
                return candidate;
            }
        }
    }
}
