pub(crate) mod fermat;
pub(crate) mod miller_rabin;
pub(crate) mod solovay_strassen;
pub use fermat::FermatTest;
pub use miller_rabin::MillerRabinTest;
pub use solovay_strassen::SolovayStrassenTest;

use num_bigint::BigUint;

/// Общий каркас вероятностных тестов простоты: публичный метод один на всех,
/// конкретный тест определяет только один раунд со случайным свидетелем.
pub trait PrimalityTest {
    /// true, если n — вероятно простое с заданной доверительной вероятностью
    fn is_probably_prime(&self, n: &BigUint, confidence: f64) -> bool {
        let rounds = confidence_to_rounds(confidence);
        (0..rounds).all(|_| self.witness_round(n))
    }

    /// Один независимый раунд теста
    fn witness_round(&self, n: &BigUint) -> bool;
}

/// confidence = 1 - (1/2)^k  =>  k = log2(1 / (1 - confidence)), k ∈ [1, 30]
fn confidence_to_rounds(confidence: f64) -> u32 {
    let confidence = confidence.clamp(0.5, 1.0 - 1e-9);
    ((1.0 / (1.0 - confidence)).log2().ceil()) as u32
}
