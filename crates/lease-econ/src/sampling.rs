use lease_core::VariationBand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

/// Decimal places of a unit sample.
const UNIT_SCALE: u32 = 9;
const UNIT_STEPS: i64 = 1_000_000_000;

/// Source of uniform samples in `[0, 1)` used to perturb income and expenses.
///
/// Every `rand::Rng` is a `RandomSource`, so callers pick between a seeded
/// generator for reproducible runs and an entropy-seeded one for live use.
pub trait RandomSource {
    /// Next sample, uniform on a 1e-9 grid over `[0, 1)`.
    fn next_unit(&mut self) -> Decimal;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> Decimal {
        Decimal::new(self.gen_range(0..UNIT_STEPS), UNIT_SCALE)
    }
}

/// Deterministic generator: identical seeds replay identical projections.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}

/// Draw a multiplicative factor `1 + U(band.min, band.max)`.
///
/// A flat band always yields exactly 1.0 but still consumes one sample, so
/// the stream position does not depend on the scenario.
pub fn variation_factor<S: RandomSource + ?Sized>(band: &VariationBand, rng: &mut S) -> Decimal {
    let u = rng.next_unit();
    Decimal::ONE + band.min + u * band.width()
}
