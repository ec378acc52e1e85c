use super::MutationOperator;
use crate::error::{ensure_probability, GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

/// Moves a variable by a uniform offset in `[-range, range)` and clamps it into its bounds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PerturbationMutation {
    probability: f64,
    range: f64,
}

impl PerturbationMutation {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is outside `[0, 1]` or `range` is
    /// negative or not finite.
    pub fn new(probability: f64, range: f64) -> Result<Self> {
        if !range.is_finite() || range < 0.0 {
            return Err(GeneticError::InvalidArgument(format!(
                "perturbation range must be non-negative, got {}",
                range
            )));
        }
        Ok(Self {
            probability: ensure_probability(probability, "mutation probability")?,
            range,
        })
    }

    pub fn range(&self) -> f64 {
        self.range
    }
}

impl<V: Variable> MutationOperator<V> for PerturbationMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(&self, solution: &mut Solution<V>, rng: &mut RandomNumberGenerator) -> Result<()> {
        let bounds = solution.shared_bounds();
        for (variable, bounds) in solution.variables_mut().iter_mut().zip(bounds.iter()) {
            if rng.next_double() < self.probability {
                let offset = (2.0 * rng.next_double() - 1.0) * self.range;
                *variable = bounds.clamp_f64(variable.to_f64() + offset);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::solution::Bounds;

    #[test]
    fn test_perturbation_stays_within_range_and_bounds() {
        let bounds: Arc<[Bounds<f64>]> = vec![Bounds::new(0.0, 10.0).unwrap(); 4].into();
        let start = vec![0.2, 5.0, 9.9, 7.0];
        let mutation = PerturbationMutation::new(1.0, 0.5).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(17);

        for _ in 0..100 {
            let mut solution = Solution::new(start.clone(), Arc::clone(&bounds), 1, 0).unwrap();
            mutation.execute(&mut solution, &mut rng).unwrap();
            for (after, before) in solution.variables().iter().zip(&start) {
                assert!((after - before).abs() <= 0.5);
                assert!((0.0..=10.0).contains(after));
            }
        }
    }

    #[test]
    fn test_integer_perturbation_clamps() {
        let bounds: Arc<[Bounds<i32>]> = vec![Bounds::new(0, 3).unwrap(); 3].into();
        let mutation = PerturbationMutation::new(1.0, 10.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        for _ in 0..50 {
            let mut solution = Solution::new(vec![0, 1, 3], Arc::clone(&bounds), 1, 0).unwrap();
            mutation.execute(&mut solution, &mut rng).unwrap();
            assert!(solution.variables().iter().all(|v| (0..=3).contains(v)));
        }
    }

    #[test]
    fn test_zero_range_is_identity() {
        let bounds: Arc<[Bounds<f64>]> = vec![Bounds::new(0.0, 1.0).unwrap(); 2].into();
        let mut solution = Solution::new(vec![0.25, 0.75], bounds, 1, 0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        PerturbationMutation::new(1.0, 0.0)
            .unwrap()
            .execute(&mut solution, &mut rng)
            .unwrap();
        assert_eq!(solution.variables(), &[0.25, 0.75]);
    }
}
