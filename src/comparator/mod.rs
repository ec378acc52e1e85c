//! # Comparators
//!
//! Pure orderings over pairs of solutions. `Ordering::Less` means the first solution is
//! preferred (the `-1` of the classic comparator contract), `Ordering::Greater` means the
//! second one is, and `Ordering::Equal` means neither is.
//!
//! Comparators return a `Result` because some orderings are only defined between
//! compatible solutions: comparing solutions with different objective counts fails instead
//! of producing a wrong ordering.

pub mod constraint;
pub mod density;
pub mod dominance;
pub mod equal;
pub mod objective;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::Result;
use crate::solution::{Solution, Variable};

pub use constraint::ConstraintViolationComparator;
pub use density::{CrowdingDistanceComparator, DensityComparator};
pub use dominance::DominanceComparator;
pub use equal::EqualSolutionsComparator;
pub use objective::ObjectiveComparator;

/// An ordering over solutions with variables of type `V`.
pub trait SolutionComparator<V>: Debug + Send + Sync {
    /// Compares two solutions. `Less` means `a` is preferred.
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering>;

    /// Compares two possibly absent solutions.
    ///
    /// An absent solution sorts after a present one; two absent solutions are equal.
    fn compare_optional(
        &self,
        a: Option<&Solution<V>>,
        b: Option<&Solution<V>>,
    ) -> Result<Ordering> {
        match (a, b) {
            (None, None) => Ok(Ordering::Equal),
            (None, Some(_)) => Ok(Ordering::Greater),
            (Some(_), None) => Ok(Ordering::Less),
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }
}

/// Applies comparators in order and returns the first result that is not `Equal`.
///
/// Used to break dominance ties with crowding distance.
#[derive(Debug)]
pub struct ChainedComparator<V> {
    comparators: Vec<Box<dyn SolutionComparator<V>>>,
}

impl<V> ChainedComparator<V> {
    pub fn new(comparators: Vec<Box<dyn SolutionComparator<V>>>) -> Self {
        Self { comparators }
    }
}

impl<V: Variable> ChainedComparator<V> {
    /// Dominance first, crowding distance second.
    pub fn dominance_then_crowding() -> Self {
        let dominance: Box<dyn SolutionComparator<V>> = Box::new(DominanceComparator::new());
        let crowding: Box<dyn SolutionComparator<V>> =
            Box::new(CrowdingDistanceComparator::default());
        Self::new(vec![dominance, crowding])
    }
}

impl<V: Variable> SolutionComparator<V> for ChainedComparator<V> {
    fn compare(&self, a: &Solution<V>, b: &Solution<V>) -> Result<Ordering> {
        for comparator in &self.comparators {
            let ordering = comparator.compare(a, b)?;
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }
}
