use xoroshiro128::Xoroshiro;

pub mod xoroshiro128;

/// A fresh seed from the thread-local OS-seeded generator.
pub fn get_seed() -> u64 {
    rand::random()
}

pub enum RandomGenerator {
    Xoroshiro(Xoroshiro),
}

impl RandomGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::Xoroshiro(Xoroshiro::from_seed(seed))
    }
}

impl RandomImpl for RandomGenerator {
    #[inline]
    fn next_i64(&mut self) -> i64 {
        match self {
            Self::Xoroshiro(rand) => rand.next_i64(),
        }
    }
}

pub trait RandomImpl {
    fn next_i64(&mut self) -> i64;

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_i64() as u64 >> 11) as f64 * 1.110_223_024_625_156_5E-16f64
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomGenerator, RandomImpl, get_seed};

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut random = RandomGenerator::from_seed(get_seed());
        for _ in 0..1000 {
            let d = random.next_f64();
            assert!((0.0..1.0).contains(&d), "{d} is outside [0, 1)");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomGenerator::from_seed(1234);
        let mut b = RandomGenerator::from_seed(1234);
        for _ in 0..16 {
            assert_eq!(a.next_i64(), b.next_i64());
        }
    }
}
