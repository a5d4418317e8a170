use rand::Rng;

/// Uniform randomness consumed by the engine.
///
/// The engine needs exactly two draws: a uniform integer in a half-open
/// range and a uniform float in `[0.0, 1.0)`. Keeping the surface this
/// narrow lets tests substitute fully scripted sources where a seeded
/// generator is not precise enough.
pub trait RandomSource {
    /// Uniform integer in the half-open range `[lo, hi)`.
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform float in `[0.0, 1.0)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        self.random_range(lo..hi)
    }

    fn unit(&mut self) -> f64 {
        self.random_range(0.0..1.0)
    }
}
