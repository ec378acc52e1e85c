//! # Archives
//!
//! An archive accumulates the non-dominated solutions found during a run. Members are
//! always pairwise non-dominated and never duplicated. A `BoundedArchive` additionally
//! caps its size, pruning the solution in the most crowded region when it overflows.

pub mod bounded;
pub mod non_dominated;

use std::fmt::Debug;

use crate::error::Result;
use crate::solution::{Solution, Variable};

pub use bounded::BoundedArchive;
pub use non_dominated::NonDominatedArchive;

/// A collection of mutually non-dominated solutions.
pub trait Archive<V: Variable>: Debug + Send + Sync {
    /// Offers `solution` to the archive. Returns `true` if it was inserted.
    fn add(&mut self, solution: Solution<V>) -> Result<bool>;

    fn solutions(&self) -> &[Solution<V>];

    fn size(&self) -> usize {
        self.solutions().len()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn get(&self, index: usize) -> Option<&Solution<V>> {
        self.solutions().get(index)
    }

    /// Offers every member of `other` to this archive and returns the resulting members.
    fn join(&mut self, other: &dyn Archive<V>) -> Result<&[Solution<V>]> {
        for solution in other.solutions() {
            self.add(solution.clone())?;
        }
        Ok(self.solutions())
    }
}
