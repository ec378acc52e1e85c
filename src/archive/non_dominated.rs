use std::cmp::Ordering;

use super::Archive;
use crate::comparator::{DominanceComparator, EqualSolutionsComparator, SolutionComparator};
use crate::error::Result;
use crate::solution::{Solution, Variable};

/// An unbounded archive of non-dominated solutions.
///
/// Insertion scans every member once:
/// - a member dominating the candidate rejects it and leaves the archive untouched,
/// - members dominated by the candidate are removed,
/// - a non-dominated candidate duplicating a member (same objectives and variables) is
///   rejected.
///
/// # Examples
///
/// ```
/// use pareto_ga::archive::{Archive, NonDominatedArchive};
/// use pareto_ga::solution::Solution;
///
/// let mut archive = NonDominatedArchive::<f64>::new();
/// assert!(archive.add(Solution::from_objectives(vec![2.0, 2.0])).unwrap());
/// assert!(archive.add(Solution::from_objectives(vec![1.0, 1.0])).unwrap());
///
/// assert_eq!(archive.size(), 1);
/// assert_eq!(archive.solutions()[0].objectives(), &[1.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<V> {
    solutions: Vec<Solution<V>>,
    dominance: DominanceComparator,
    equality: EqualSolutionsComparator,
}

impl<V: Variable> NonDominatedArchive<V> {
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
            dominance: DominanceComparator::new(),
            equality: EqualSolutionsComparator::new(),
        }
    }

    /// Mutable access to the members, for attaching attributes such as densities.
    pub(crate) fn solutions_mut(&mut self) -> &mut [Solution<V>] {
        &mut self.solutions
    }

    pub(crate) fn remove(&mut self, index: usize) -> Solution<V> {
        self.solutions.remove(index)
    }

    pub fn into_solutions(self) -> Vec<Solution<V>> {
        self.solutions
    }
}

impl<V: Variable> Default for NonDominatedArchive<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variable> Archive<V> for NonDominatedArchive<V> {
    fn add(&mut self, solution: Solution<V>) -> Result<bool> {
        let mut dominated = Vec::new();

        for (index, member) in self.solutions.iter().enumerate() {
            match self.dominance.compare(&solution, member)? {
                Ordering::Greater => return Ok(false),
                Ordering::Less => dominated.push(index),
                Ordering::Equal => {
                    if solution.objectives() == member.objectives()
                        && self.equality.equal(&solution, member)
                    {
                        return Ok(false);
                    }
                }
            }
        }

        for index in dominated.into_iter().rev() {
            self.solutions.remove(index);
        }
        self.solutions.push(solution);
        Ok(true)
    }

    fn solutions(&self) -> &[Solution<V>] {
        &self.solutions
    }
}
