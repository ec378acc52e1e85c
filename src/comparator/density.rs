use std::cmp::Ordering;

use super::SolutionComparator;
use crate::error::Result;
use crate::solution::{AttributeKey, AttributeValue, Solution, Variable};

/// Orders solutions by descending density attribute: the more isolated solution is
/// preferred. A missing attribute counts as `0.0`. Ties compare `Equal`, so stable sorts
/// keep the original order among equally crowded solutions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityComparator {
    key: AttributeKey,
}

/// The density comparator over the crowding distance attribute.
pub type CrowdingDistanceComparator = DensityComparator;

impl DensityComparator {
    pub fn new(key: AttributeKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    fn density<V: Variable>(&self, solution: &Solution<V>) -> f64 {
        solution
            .attribute(&self.key)
            .and_then(AttributeValue::as_f64)
            .unwrap_or(0.0)
    }
}

impl Default for DensityComparator {
    fn default() -> Self {
        Self::new(AttributeKey::CrowdingDistance)
    }
}

impl<V: Variable> SolutionComparator<V> for DensityComparator {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        let density_a = self.density(a);
        let density_b = self.density(b);
        Ok(density_b.partial_cmp(&density_a).unwrap_or(Ordering::Equal))
    }
}
