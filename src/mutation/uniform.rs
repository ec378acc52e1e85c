use super::MutationOperator;
use crate::error::{ensure_probability, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

/// Replaces a variable with a value drawn uniformly within its bounds.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pareto_ga::mutation::{MutationOperator, UniformMutation};
/// use pareto_ga::rng::RandomNumberGenerator;
/// use pareto_ga::solution::{Bounds, Solution};
///
/// let bounds: Arc<[Bounds<i32>]> = vec![Bounds::new(0, 3).unwrap(); 5].into();
/// let mut solution = Solution::new(vec![1; 5], bounds, 1, 0).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(2);
/// UniformMutation::new(1.0).unwrap().execute(&mut solution, &mut rng).unwrap();
///
/// assert!(solution.variables().iter().all(|v| (0..=3).contains(v)));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct UniformMutation {
    probability: f64,
}

impl UniformMutation {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability(probability, "mutation probability")?,
        })
    }
}

impl<V: Variable> MutationOperator<V> for UniformMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(&self, solution: &mut Solution<V>, rng: &mut RandomNumberGenerator) -> Result<()> {
        let bounds = solution.shared_bounds();
        for (variable, bounds) in solution.variables_mut().iter_mut().zip(bounds.iter()) {
            if rng.next_double() < self.probability {
                *variable = V::sample(bounds, rng)?;
            }
        }
        Ok(())
    }
}
