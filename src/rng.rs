//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness of the engine.
//! There is no shared global instance: the algorithm driver owns one generator and lends
//! it to every operator that needs randomness, so a run is reproducible from its seed.
//!
//! ## Example
//!
//! ```rust
//! use pareto_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let u = rng.next_double();
//! assert!((0.0..1.0).contains(&u));
//!
//! let index = rng.next_int(10).unwrap();
//! assert!(index < 10);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{GeneticError, Result};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restarts the stream from the given seed.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn next_double(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniformly distributed value in `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `upper <= lower` or either bound is not finite.
    pub fn next_double_range(&mut self, lower: f64, upper: f64) -> Result<f64> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(GeneticError::InvalidArgument(format!(
                "invalid range [{}, {})",
                lower, upper
            )));
        }
        Ok(self.rng.gen_range(lower..upper))
    }

    /// Returns a uniformly distributed index in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bound` is zero.
    pub fn next_int(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(GeneticError::InvalidArgument(
                "bound must be greater than 0".to_string(),
            ));
        }
        Ok(self.rng.gen_range(0..bound))
    }

    /// Returns a uniformly distributed integer in `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `upper <= lower`.
    pub fn next_int_range(&mut self, lower: i64, upper: i64) -> Result<i64> {
        if upper <= lower {
            return Err(GeneticError::InvalidArgument(format!(
                "invalid range [{}, {})",
                lower, upper
            )));
        }
        Ok(self.rng.gen_range(lower..upper))
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_double_in_unit_interval() {
        let mut rng = RandomNumberGenerator::new();
        for _ in 0..1000 {
            let u = rng.next_double();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_next_int_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        for _ in 0..1000 {
            assert!(rng.next_int(5).unwrap() < 5);
            let v = rng.next_int_range(-3, 4).unwrap();
            assert!((-3..4).contains(&v));
        }
    }

    #[test]
    fn test_invalid_bounds() {
        let mut rng = RandomNumberGenerator::new();
        assert!(matches!(
            rng.next_int(0),
            Err(GeneticError::InvalidArgument(_))
        ));
        assert!(matches!(
            rng.next_int_range(4, 4),
            Err(GeneticError::InvalidArgument(_))
        ));
        assert!(matches!(
            rng.next_double_range(1.0, -1.0),
            Err(GeneticError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1: Vec<f64> = (0..5).map(|_| rng1.next_double()).collect();
        let nums2: Vec<f64> = (0..5).map(|_| rng2.next_double()).collect();

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_set_seed_restarts_stream() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let first: Vec<usize> = (0..5).map(|_| rng.next_int(100).unwrap()).collect();
        rng.set_seed(9);
        let second: Vec<usize> = (0..5).map(|_| rng.next_int(100).unwrap()).collect();
        assert_eq!(first, second);
    }
}
