//! # Error Types
//!
//! This module defines the error type shared by every component of the engine.
//! Argument validation errors are raised when a component is constructed, simulation
//! errors come from the external evaluator and abort the current run, and invariant
//! violations (such as comparing solutions with different objective counts) fail loudly
//! instead of producing a wrong ordering.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use pareto_ga::error::{GeneticError, Result};
//!
//! fn check_probability(probability: f64) -> Result<f64> {
//!     if probability < 0.0 {
//!         return Err(GeneticError::InvalidArgument(format!(
//!             "probability must not be negative: {}",
//!             probability
//!         )));
//!     }
//!     Ok(probability)
//! }
//!
//! assert!(check_probability(-0.5).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use pareto_ga::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_front(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open reference front")?;
//!     Ok(())
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use pareto_ga::error::{GeneticError, OptionExt};
//!
//! fn first_objective(objectives: &[f64]) -> pareto_ga::error::Result<f64> {
//!     objectives.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::problem::SimulationError;

/// Represents errors that can occur in the optimization engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A component was configured with an invalid value: a negative probability, an
    /// operator arity mismatch, a zero size or inverted bounds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required collaborator or solution is missing.
    #[error("Missing argument: {0}")]
    NullArgument(String),

    /// The external evaluator failed. Fatal to the current run.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Two solutions or points with different numbers of objectives were compared.
    #[error("Mismatched objectives: expected {expected}, found {found}")]
    MismatchedObjectives { expected: usize, found: usize },

    /// Error that occurs when NaN values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The algorithm driver was used in a state that does not allow the operation.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// A reference front could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use pareto_ga::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> pareto_ga::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error, converting it to `GeneticError::Other`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure to
    /// generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Converts a standard error to a `GeneticError::Parse` carrying some context.
///
/// ## Examples
///
/// ```rust
/// use pareto_ga::error::{to_genetic_error, GeneticError};
///
/// let err = "x1".parse::<f64>().unwrap_err();
/// let converted = to_genetic_error(err, "line 3");
/// assert!(matches!(converted, GeneticError::Parse(_)));
/// ```
pub fn to_genetic_error<E: StdError>(error: E, context: &str) -> GeneticError {
    GeneticError::Parse(format!("{}: {}", context, error))
}

/// Checks that an operator probability lies in `[0, 1]`.
pub(crate) fn ensure_probability(value: f64, name: &str) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::InvalidArgument(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_converts() {
        fn evaluate() -> Result<()> {
            Err(SimulationError::new("solver did not converge"))?;
            Ok(())
        }

        match evaluate() {
            Err(GeneticError::Simulation(e)) => {
                assert!(e.to_string().contains("did not converge"));
            }
            other => panic!("Expected Simulation error, got {:?}", other),
        }
    }

    #[test]
    fn test_context_wraps_foreign_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("reading front").unwrap_err();
        assert_eq!(err.to_string(), "reading front: missing");
    }

    #[test]
    fn test_ensure_probability() {
        assert_eq!(ensure_probability(0.0, "p").unwrap(), 0.0);
        assert_eq!(ensure_probability(1.0, "p").unwrap(), 1.0);
        assert!(matches!(
            ensure_probability(-0.1, "p"),
            Err(GeneticError::InvalidArgument(_))
        ));
        assert!(ensure_probability(1.5, "p").is_err());
        assert!(ensure_probability(f64::NAN, "p").is_err());
    }

    #[test]
    fn test_mismatched_objectives_message() {
        let err = GeneticError::MismatchedObjectives {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "Mismatched objectives: expected 2, found 3");
    }
}
