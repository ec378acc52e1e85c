//! Hypervolume contribution as a density value.
//!
//! Each solution is scored with the volume the set would lose without it, measured
//! against the set's own nadir point moved outwards by `offset`. Pruning the solution
//! with the smallest contribution keeps the archive hypervolume as large as possible.

use super::{common_objective_count, DensityEstimator};
use crate::error::{GeneticError, Result};
use crate::indicator::{HypervolumeAlgorithm, SlicingHypervolume};
use crate::solution::{AttributeKey, AttributeValue, Solution, Variable};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct HypervolumeContribution {
    offset: f64,
}

impl HypervolumeContribution {
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `offset` is finite and positive.
    pub fn new(offset: f64) -> Result<Self> {
        if !offset.is_finite() || offset <= 0.0 {
            return Err(GeneticError::InvalidArgument(format!(
                "hypervolume offset must be positive, got {}",
                offset
            )));
        }
        Ok(Self { offset })
    }
}

impl Default for HypervolumeContribution {
    fn default() -> Self {
        Self { offset: 1.0 }
    }
}

impl<V: Variable> DensityEstimator<V> for HypervolumeContribution {
    fn compute(&self, solutions: &mut [Solution<V>]) -> Result<()> {
        let m = common_objective_count(solutions)?;
        if solutions.is_empty() {
            return Ok(());
        }

        let points: Vec<Vec<f64>> = solutions.iter().map(|s| s.objectives().to_vec()).collect();
        let mut reference = vec![f64::NEG_INFINITY; m];
        for point in &points {
            for (r, v) in reference.iter_mut().zip(point) {
                *r = r.max(*v);
            }
        }
        reference.iter_mut().for_each(|r| *r += self.offset);

        let contributions = SlicingHypervolume.contributions(&points, &reference)?;
        for (solution, contribution) in solutions.iter_mut().zip(contributions) {
            solution.set_attribute(
                AttributeKey::HypervolumeContribution,
                AttributeValue::Float(contribution),
            );
        }
        Ok(())
    }

    fn attribute_key(&self) -> AttributeKey {
        AttributeKey::HypervolumeContribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowded_point_contributes_least() {
        let mut solutions: Vec<Solution<f64>> = [[0.0, 4.0], [1.9, 2.1], [2.0, 2.0], [4.0, 0.0]]
            .iter()
            .map(|p| Solution::from_objectives(p.to_vec()))
            .collect();

        HypervolumeContribution::default()
            .compute(&mut solutions)
            .unwrap();

        let value = |i: usize| {
            solutions[i]
                .attribute(&AttributeKey::HypervolumeContribution)
                .and_then(AttributeValue::as_f64)
                .unwrap()
        };
        assert!(value(1) < value(0));
        assert!(value(2) < value(3));
    }

    #[test]
    fn test_invalid_offset() {
        assert!(HypervolumeContribution::new(0.0).is_err());
        assert!(HypervolumeContribution::new(f64::NAN).is_err());
    }
}
