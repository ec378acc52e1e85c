use std::cmp::Ordering;

use super::SolutionComparator;
use crate::error::Result;
use crate::solution::{Solution, Variable};

/// Prefers the solution with the smaller overall constraint violation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintViolationComparator;

impl ConstraintViolationComparator {
    pub fn new() -> Self {
        Self
    }
}

impl<V: Variable> SolutionComparator<V> for ConstraintViolationComparator {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        // violations are <= 0, closer to zero is better
        let violation_a = a.overall_constraint_violation();
        let violation_b = b.overall_constraint_violation();
        Ok(violation_b
            .partial_cmp(&violation_a)
            .unwrap_or(Ordering::Equal))
    }
}
