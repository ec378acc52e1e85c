//! # Mutation
//!
//! Mutation operators change a solution in place. For every decision variable a uniform
//! value `u` in `[0, 1)` is drawn and the variable is replaced iff `u < probability`; how
//! the replacement is chosen is up to the operator. New values always stay within the
//! variable bounds. Callers that need the original must copy it first.

pub mod perturbation;
pub mod polynomial;
pub mod uniform;

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

pub use perturbation::PerturbationMutation;
pub use polynomial::PolynomialMutation;
pub use uniform::UniformMutation;

/// Mutates a solution in place.
pub trait MutationOperator<V: Variable>: Debug + Send + Sync {
    /// The per-variable mutation probability.
    fn probability(&self) -> f64;

    fn execute(&self, solution: &mut Solution<V>, rng: &mut RandomNumberGenerator) -> Result<()>;
}

/// The available mutation operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MutationKind {
    Uniform { probability: f64 },
    Perturbation { probability: f64, range: f64 },
    Polynomial { probability: f64, distribution_index: f64 },
}

impl Default for MutationKind {
    fn default() -> Self {
        MutationKind::Uniform { probability: 0.1 }
    }
}

impl MutationKind {
    /// Builds the operator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a probability outside `[0, 1]`, a negative range or
    /// an invalid distribution index.
    pub fn build<V: Variable>(&self) -> Result<Box<dyn MutationOperator<V>>> {
        let operator: Box<dyn MutationOperator<V>> = match *self {
            MutationKind::Uniform { probability } => Box::new(UniformMutation::new(probability)?),
            MutationKind::Perturbation { probability, range } => {
                Box::new(PerturbationMutation::new(probability, range)?)
            }
            MutationKind::Polynomial {
                probability,
                distribution_index,
            } => Box::new(PolynomialMutation::new(probability, distribution_index)?),
        };
        Ok(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_build_rejects_negative_probability() {
        let kinds = [
            MutationKind::Uniform { probability: -0.1 },
            MutationKind::Perturbation {
                probability: -0.1,
                range: 1.0,
            },
            MutationKind::Polynomial {
                probability: -0.1,
                distribution_index: 20.0,
            },
        ];
        for kind in kinds {
            assert!(matches!(
                kind.build::<f64>(),
                Err(GeneticError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_build_rejects_negative_range() {
        let kind = MutationKind::Perturbation {
            probability: 0.5,
            range: -2.0,
        };
        assert!(kind.build::<i32>().is_err());
    }
}
