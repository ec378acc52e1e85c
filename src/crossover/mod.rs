//! # Crossover
//!
//! Crossover operators recombine parents into children. Every operator declares how many
//! parents it needs and how many children it produces, and recombines with a fixed
//! probability; otherwise the children are plain copies of the parents, in parent order.
//! Children never carry the attributes (rank, crowding distance, ...) of their parents.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pareto_ga::crossover::{CrossoverOperator, SinglePointCrossover};
//! use pareto_ga::rng::RandomNumberGenerator;
//! use pareto_ga::solution::{Bounds, Solution};
//!
//! let bounds: Arc<[Bounds<i32>]> = vec![Bounds::new(0, 9).unwrap(); 4].into();
//! let a = Solution::new(vec![0, 0, 0, 0], Arc::clone(&bounds), 1, 0).unwrap();
//! let b = Solution::new(vec![9, 9, 9, 9], bounds, 1, 0).unwrap();
//!
//! let crossover = SinglePointCrossover::new(1.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let children = crossover.execute(&[a, b], &mut rng).unwrap();
//!
//! assert_eq!(children.len(), 2);
//! for i in 0..4 {
//!     assert_eq!(children[0].variables()[i] + children[1].variables()[i], 9);
//! }
//! ```

pub mod sbx;
pub mod single_point;
pub mod uniform;

use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

pub use sbx::SbxCrossover;
pub use single_point::SinglePointCrossover;
pub use uniform::UniformCrossover;

/// Recombines parents into children.
pub trait CrossoverOperator<V: Variable>: Debug + Send + Sync {
    /// The probability of recombining; otherwise the parents are copied.
    fn probability(&self) -> f64;

    fn required_parents(&self) -> usize;

    fn produced_children(&self) -> usize;

    /// Produces `produced_children()` children from exactly `required_parents()` parents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the number of parents differs from
    /// `required_parents()` or the parents have different numbers of variables.
    fn execute(
        &self,
        parents: &[Solution<V>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>>;
}

/// Checks the arity and returns attribute-free copies of the parents.
pub(crate) fn copy_parents<V: Variable>(
    parents: &[Solution<V>],
    required: usize,
) -> Result<Vec<Solution<V>>> {
    if parents.len() != required {
        return Err(GeneticError::InvalidArgument(format!(
            "crossover requires {} parents, got {}",
            required,
            parents.len()
        )));
    }

    let variables = parents.first().map_or(0, Solution::number_of_variables);
    if parents.iter().any(|p| p.number_of_variables() != variables) {
        return Err(GeneticError::InvalidArgument(
            "parents have different numbers of variables".to_string(),
        ));
    }

    Ok(parents
        .iter()
        .map(|parent| {
            let mut child = parent.clone();
            child.clear_attributes();
            child
        })
        .collect())
}

/// Splits a pair of children into two mutable references.
pub(crate) fn pair_mut<V>(children: &mut [Solution<V>]) -> (&mut Solution<V>, &mut Solution<V>) {
    let (first, second) = children.split_at_mut(1);
    (&mut first[0], &mut second[0])
}

/// The available crossover operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossoverKind {
    SinglePoint { probability: f64 },
    Uniform { probability: f64 },
    Sbx { probability: f64, distribution_index: f64 },
}

impl Default for CrossoverKind {
    fn default() -> Self {
        CrossoverKind::SinglePoint { probability: 0.9 }
    }
}

impl CrossoverKind {
    /// Builds the operator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a probability outside `[0, 1]` or an invalid
    /// distribution index.
    pub fn build<V: Variable>(&self) -> Result<Box<dyn CrossoverOperator<V>>> {
        let operator: Box<dyn CrossoverOperator<V>> = match *self {
            CrossoverKind::SinglePoint { probability } => {
                Box::new(SinglePointCrossover::new(probability)?)
            }
            CrossoverKind::Uniform { probability } => Box::new(UniformCrossover::new(probability)?),
            CrossoverKind::Sbx {
                probability,
                distribution_index,
            } => Box::new(SbxCrossover::new(probability, distribution_index)?),
        };
        Ok(operator)
    }
}
