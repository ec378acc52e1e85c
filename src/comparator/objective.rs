use std::cmp::Ordering;

use super::SolutionComparator;
use crate::error::{GeneticError, Result};
use crate::solution::{Solution, Variable};

/// Orders solutions by a single objective.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveComparator {
    index: usize,
    ascending: bool,
}

impl ObjectiveComparator {
    /// Ascending order on objective `index` (the best of a minimization first).
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ascending: true,
        }
    }

    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    fn value<V: Variable>(&self, solution: &Solution<V>) -> Result<f64> {
        let value = solution.objective(self.index).ok_or_else(|| {
            GeneticError::MismatchedObjectives {
                expected: self.index + 1,
                found: solution.number_of_objectives(),
            }
        })?;
        if value.is_nan() {
            return Err(GeneticError::InvalidNumericValue(format!(
                "objective {} is NaN",
                self.index
            )));
        }
        Ok(value)
    }
}

impl<V: Variable> SolutionComparator<V> for ObjectiveComparator {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        let ordering = self
            .value(a)?
            .partial_cmp(&self.value(b)?)
            .unwrap_or(Ordering::Equal);
        Ok(if self.ascending {
            ordering
        } else {
            ordering.reverse()
        })
    }
}
