use std::cmp::Ordering;

use super::SolutionComparator;
use crate::error::{GeneticError, Result};
use crate::solution::{Solution, Variable};

/// Pareto dominance with a feasibility short-circuit.
///
/// The overall constraint violation is compared first: if it differs, the less violating
/// solution dominates regardless of its objectives. If both solutions violate their
/// constraints by the same amount (feasible solutions violate by zero), `a` dominates `b`
/// when it is no worse in every objective and strictly better in at least one. All
/// objectives are minimized.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pareto_ga::comparator::{DominanceComparator, SolutionComparator};
/// use pareto_ga::solution::Solution;
///
/// let a = Solution::<f64>::from_objectives(vec![1.0, 2.0]);
/// let b = Solution::<f64>::from_objectives(vec![2.0, 2.0]);
/// let c = Solution::<f64>::from_objectives(vec![0.5, 3.0]);
///
/// let comparator = DominanceComparator::new();
/// assert_eq!(comparator.compare(&a, &b).unwrap(), Ordering::Less);
/// assert_eq!(comparator.compare(&b, &a).unwrap(), Ordering::Greater);
/// assert_eq!(comparator.compare(&a, &c).unwrap(), Ordering::Equal);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct DominanceComparator;

impl DominanceComparator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if `a` dominates `b`.
    pub fn dominates<V: Variable>(&self, a: &Solution<V>, b: &Solution<V>) -> Result<bool> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    fn compare_objectives(a: &[f64], b: &[f64]) -> Result<Ordering> {
        let mut a_better = false;
        let mut b_better = false;

        for (va, vb) in a.iter().zip(b) {
            if va.is_nan() || vb.is_nan() {
                return Err(GeneticError::InvalidNumericValue(
                    "NaN objective value in dominance comparison".to_string(),
                ));
            }
            if va < vb {
                a_better = true;
            } else if vb < va {
                b_better = true;
            }
        }

        Ok(match (a_better, b_better) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }
}

impl<V: Variable> SolutionComparator<V> for DominanceComparator {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        if a.number_of_objectives() != b.number_of_objectives() {
            return Err(GeneticError::MismatchedObjectives {
                expected: a.number_of_objectives(),
                found: b.number_of_objectives(),
            });
        }

        let violation_a = a.overall_constraint_violation();
        let violation_b = b.overall_constraint_violation();
        if violation_a > violation_b {
            return Ok(Ordering::Less);
        }
        if violation_b > violation_a {
            return Ok(Ordering::Greater);
        }

        Self::compare_objectives(a.objectives(), b.objectives())
    }
}
