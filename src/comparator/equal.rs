use std::cmp::Ordering;

use super::SolutionComparator;
use crate::error::Result;
use crate::solution::{Solution, Variable};

/// Two solutions are `Equal` when every decision variable is equal; otherwise the first
/// differing variable decides. Used by archives to reject duplicates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualSolutionsComparator;

impl EqualSolutionsComparator {
    pub fn new() -> Self {
        Self
    }

    pub fn equal<V: Variable>(&self, a: &Solution<V>, b: &Solution<V>) -> bool {
        a.variables() == b.variables()
    }
}

impl<V: Variable> SolutionComparator<V> for EqualSolutionsComparator {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        if a.number_of_variables() != b.number_of_variables() {
            return Ok(a.number_of_variables().cmp(&b.number_of_variables()));
        }

        for (va, vb) in a.variables().iter().zip(b.variables()) {
            match va.partial_cmp(vb) {
                Some(Ordering::Equal) => continue,
                Some(ordering) => return Ok(ordering),
                // NaN variables are never equal to anything
                None => return Ok(Ordering::Greater),
            }
        }

        Ok(Ordering::Equal)
    }
}
