//! Random draws for procedural generation.
//!
//! There is one process-wide [Sampler], set up once with [init_global] (or
//! lazily from OS entropy the first time [with_global] runs) and never
//! reseeded afterwards. Code that wants reproducible output can build its own
//! seeded [Sampler] instead.

use std::sync::OnceLock;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static GLOBAL: OnceLock<Mutex<Sampler>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn from_seed(seed: u64) -> Self {
        Sampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Sampler {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform draw from `[min, max)`. A degenerate range, or one with a
    /// non-finite bound, gives back `min`. Never panics.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return min;
        }
        if (max - min).is_finite() {
            self.rng.gen_range(min..max)
        } else {
            // The width overflows, which gen_range can't handle, so
            // interpolate between the bounds instead.
            let x: f64 = self.rng.gen();
            (min * (1.0 - x) + max * x).clamp(min, max)
        }
    }

    /// Draw from a logistic distribution with unit scale, by pushing a uniform
    /// draw through the logit function. The uniform draw is kept away from 0
    /// and 1 so the logarithms stay finite.
    pub fn logistic(&mut self, location: f64) -> f64 {
        let x = self.uniform(0.0, 1.0).clamp(f64::EPSILON, 1.0 - f64::EPSILON);
        x.ln() - (1.0 - x).ln() + location
    }
}

/// Seeds the process-wide sampler. Returns false if it was already set up, in
/// which case the existing sampler is left untouched.
pub fn init_global(seed: Option<u64>) -> bool {
    let sampler = match seed {
        Some(seed) => Sampler::from_seed(seed),
        None => Sampler::from_entropy(),
    };
    GLOBAL.set(Mutex::new(sampler)).is_ok()
}

/// Runs `f` with exclusive access to the process-wide sampler.
pub fn with_global<R>(f: impl FnOnce(&mut Sampler) -> R) -> R {
    let global = GLOBAL.get_or_init(|| Mutex::new(Sampler::from_entropy()));
    let mut sampler = global.lock();
    f(&mut sampler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut sampler = Sampler::from_seed(7);
        for (min, max) in [(0.0, 1.0), (-100.0, 100.0), (0.6, 1.2), (1e11, 4e11)] {
            for _ in 0..10_000 {
                let x = sampler.uniform(min, max);
                assert!(min <= x && x < max, "{} outside [{}, {})", x, min, max);
            }
        }
    }

    #[test]
    fn test_uniform_mean() {
        let mut sampler = Sampler::from_seed(11);
        let n = 100_000;
        let mean = (0..n).map(|_| sampler.uniform(2.0, 4.0)).sum::<f64>() / n as f64;
        approx::assert_abs_diff_eq!(mean, 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut sampler = Sampler::from_seed(0);
        assert_eq!(sampler.uniform(5.0, 5.0), 5.0);
        assert_eq!(sampler.uniform(5.0, 1.0), 5.0);
        assert!(sampler.uniform(f64::NAN, 1.0).is_nan());
        assert_eq!(sampler.uniform(0.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_uniform_non_finite_bounds() {
        let mut sampler = Sampler::from_seed(3);
        assert_eq!(sampler.uniform(0.0, f64::INFINITY), 0.0);
        assert_eq!(sampler.uniform(f64::NEG_INFINITY, 1.0), f64::NEG_INFINITY);
        assert_eq!(
            sampler.uniform(f64::NEG_INFINITY, f64::INFINITY),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_uniform_overflowing_width() {
        let mut sampler = Sampler::from_seed(5);
        let draws: Vec<f64> = (0..10_000)
            .map(|_| sampler.uniform(-f64::MAX, f64::MAX))
            .collect();
        assert!(draws.iter().all(|x| x.is_finite()));
        // Both halves of the range get used
        assert!(draws.iter().any(|&x| x < -1e307));
        assert!(draws.iter().any(|&x| x > 1e307));

        for _ in 0..1000 {
            let x = sampler.uniform(-1.0, f64::MAX);
            assert!((-1.0..=f64::MAX).contains(&x));
        }
    }

    #[test]
    fn test_seeded_samplers_agree() {
        let mut a = Sampler::from_seed(1234);
        let mut b = Sampler::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn test_logistic_is_finite_and_centered() {
        let mut sampler = Sampler::from_seed(99);
        let mut draws: Vec<f64> = (0..20_001).map(|_| sampler.logistic(1.0)).collect();
        assert!(draws.iter().all(|x| x.is_finite()));

        draws.sort_by(f64::total_cmp);
        let median = draws[draws.len() / 2];
        approx::assert_abs_diff_eq!(median, 1.0, epsilon = 0.05);
    }

    #[test]
    fn test_global_sampler() {
        // Whether or not another test got here first, the global must work.
        init_global(Some(42));
        assert!(!init_global(Some(43)));
        let x = with_global(|s| s.uniform(-1.0, 1.0));
        assert!((-1.0..1.0).contains(&x));
    }
}
