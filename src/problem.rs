//! # Problem
//!
//! The `Problem` trait is the contract between the engine and the system being optimized.
//! It declares the shape of a solution (variables, objectives, constraints and variable
//! bounds), knows how to create a random solution, and evaluates solutions by filling in
//! their objective and constraint values.
//!
//! Evaluation usually delegates to an external simulator. When that simulator fails (for
//! instance a hydraulic solver that does not converge), `evaluate` returns a
//! `SimulationError` and the run is aborted.
//!
//! ## Example
//!
//! ```rust
//! use pareto_ga::problem::{Problem, SimulationError};
//! use pareto_ga::solution::Solution;
//!
//! /// Schaffer's single-variable, two-objective problem.
//! struct Schaffer;
//!
//! impl Problem<f64> for Schaffer {
//!     fn number_of_variables(&self) -> usize { 1 }
//!     fn number_of_objectives(&self) -> usize { 2 }
//!     fn lower_bound(&self, _index: usize) -> f64 { -10.0 }
//!     fn upper_bound(&self, _index: usize) -> f64 { 10.0 }
//!
//!     fn evaluate(&self, solution: &mut Solution<f64>) -> Result<(), SimulationError> {
//!         let x = solution.variables()[0];
//!         solution.objectives_mut().copy_from_slice(&[x * x, (x - 2.0).powi(2)]);
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::solution::{Bounds, Solution, Variable};

/// Failure reported by the external evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct SimulationError {
    message: String,
}

impl SimulationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An optimization problem over variables of type `V`.
///
/// Objectives are minimized; a problem that maximizes an objective stores its negation.
/// Constraint values below zero mean the constraint is violated.
pub trait Problem<V: Variable> {
    fn name(&self) -> &str {
        "problem"
    }

    fn number_of_variables(&self) -> usize;

    fn number_of_objectives(&self) -> usize;

    fn number_of_constraints(&self) -> usize {
        0
    }

    fn lower_bound(&self, index: usize) -> V;

    fn upper_bound(&self, index: usize) -> V;

    /// The bounds of every variable, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a lower bound is greater than its upper bound.
    fn bounds(&self) -> Result<Arc<[Bounds<V>]>> {
        (0..self.number_of_variables())
            .map(|i| Bounds::new(self.lower_bound(i), self.upper_bound(i)))
            .collect::<Result<Vec<_>>>()
            .map(Arc::from)
    }

    /// Creates a solution whose variables are drawn uniformly within their bounds.
    fn create_solution(&self, rng: &mut RandomNumberGenerator) -> Result<Solution<V>> {
        let bounds = self.bounds()?;
        let variables = bounds
            .iter()
            .map(|b| V::sample(b, rng))
            .collect::<Result<Vec<_>>>()?;

        Solution::new(
            variables,
            bounds,
            self.number_of_objectives(),
            self.number_of_constraints(),
        )
    }

    /// Computes the objective and constraint values of `solution` in place.
    fn evaluate(&self, solution: &mut Solution<V>) -> std::result::Result<(), SimulationError>;
}
