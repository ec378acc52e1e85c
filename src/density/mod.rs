//! # Density Estimators
//!
//! A density estimator attaches a numeric attribute to every solution of a set, measuring
//! how isolated the solution is in objective space. Higher values mean sparser regions.
//! The values are only used for tie-breaking and archive pruning, never for dominance.

pub mod crowding;
pub mod hypervolume;

use std::fmt::Debug;

use crate::comparator::DensityComparator;
use crate::error::{GeneticError, Result};
use crate::solution::{AttributeKey, Solution, Variable};

pub use crowding::CrowdingDistance;
pub use hypervolume::HypervolumeContribution;

/// Computes a density value for every solution of a set.
pub trait DensityEstimator<V: Variable>: Debug + Send + Sync {
    /// Computes the density of every solution and stores it under `attribute_key()`.
    fn compute(&self, solutions: &mut [Solution<V>]) -> Result<()>;

    /// The attribute the density is stored under.
    fn attribute_key(&self) -> AttributeKey;

    /// The comparator preferring solutions with a higher density value.
    fn comparator(&self) -> DensityComparator {
        DensityComparator::new(self.attribute_key())
    }
}

/// Returns the common objective count of `solutions`.
pub(crate) fn common_objective_count<V: Variable>(solutions: &[Solution<V>]) -> Result<usize> {
    let expected = solutions.first().map_or(0, Solution::number_of_objectives);
    for solution in solutions {
        if solution.number_of_objectives() != expected {
            return Err(GeneticError::MismatchedObjectives {
                expected,
                found: solution.number_of_objectives(),
            });
        }
        if solution.objectives().iter().any(|v| v.is_nan()) {
            return Err(GeneticError::InvalidNumericValue(
                "NaN objective value in density estimation".to_string(),
            ));
        }
    }
    Ok(expected)
}
