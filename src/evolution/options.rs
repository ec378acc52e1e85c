//! # AlgorithmOptions
//!
//! The `AlgorithmOptions` struct holds the plain-value configuration of a run: population
//! and offspring sizes, archive capacity, the termination criterion and the logging level.
//! The batch size above which evaluation goes parallel belongs to `ParallelEvaluator`.
//!
//! Two termination criteria are available and they are alternatives: a budget of
//! evaluations, or a number of consecutive generations without improvement. Setting one
//! resets the other to 0 (disabled). Options with both disabled are rejected.
//!
//! ## Example
//!
//! ```rust
//! use pareto_ga::evolution::options::{AlgorithmOptions, LogLevel};
//!
//! let options = AlgorithmOptions::builder()
//!     .population_size(40)
//!     .offspring_size(40)
//!     .archive_size(60)
//!     .max_generations_without_improvement(25)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_max_evaluations(), 0);
//! assert_eq!(options.get_max_generations_without_improvement(), 25);
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: one event per generation plus one per archive member.
//! - `Minimal`: one event per generation.
//! - `None`: only lifecycle events (start, completion, cancellation, failure).

use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MAX_EVALUATIONS: usize = 25_000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmOptions {
    population_size: usize,
    offspring_size: usize,
    archive_size: usize,
    max_evaluations: usize,
    max_generations_without_improvement: usize,
    log_level: LogLevel,
}

impl AlgorithmOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_offspring_size(&self) -> usize {
        self.offspring_size
    }

    pub fn get_archive_size(&self) -> usize {
        self.archive_size
    }

    /// The evaluation budget; 0 when disabled.
    pub fn get_max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// The stagnation budget in generations; 0 when disabled.
    pub fn get_max_generations_without_improvement(&self) -> usize {
        self.max_generations_without_improvement
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_offspring_size(&mut self, offspring_size: usize) {
        self.offspring_size = offspring_size;
    }

    pub fn set_archive_size(&mut self, archive_size: usize) {
        self.archive_size = archive_size;
    }

    /// Sets the evaluation budget and disables the stagnation criterion.
    pub fn set_max_evaluations(&mut self, max_evaluations: usize) {
        self.max_evaluations = max_evaluations;
        self.max_generations_without_improvement = 0;
    }

    /// Sets the stagnation budget and disables the evaluation budget.
    pub fn set_max_generations_without_improvement(&mut self, generations: usize) {
        self.max_generations_without_improvement = generations;
        self.max_evaluations = 0;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that the options describe a run that can start and terminate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a size is 0, both termination criteria are disabled,
    /// or the evaluation budget cannot cover the initial population.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::InvalidArgument(
                "population size must be greater than 0".to_string(),
            ));
        }
        if self.offspring_size == 0 {
            return Err(GeneticError::InvalidArgument(
                "offspring size must be greater than 0".to_string(),
            ));
        }
        if self.archive_size == 0 {
            return Err(GeneticError::InvalidArgument(
                "archive size must be greater than 0".to_string(),
            ));
        }
        if self.max_evaluations == 0 && self.max_generations_without_improvement == 0 {
            return Err(GeneticError::InvalidArgument(
                "either max evaluations or max generations without improvement must be set"
                    .to_string(),
            ));
        }
        if self.max_evaluations > 0 && self.population_size > self.max_evaluations {
            return Err(GeneticError::InvalidArgument(format!(
                "population size {} exceeds the budget of {} evaluations",
                self.population_size, self.max_evaluations
            )));
        }
        Ok(())
    }

    /// Returns a builder for creating an `AlgorithmOptions` instance.
    pub fn builder() -> AlgorithmOptionsBuilder {
        AlgorithmOptionsBuilder::default()
    }
}

impl Default for AlgorithmOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            offspring_size: DEFAULT_POPULATION_SIZE,
            archive_size: DEFAULT_POPULATION_SIZE,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            max_generations_without_improvement: 0,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `AlgorithmOptions`.
///
/// Unset fields take the `AlgorithmOptions::default()` values. The last termination
/// criterion set wins.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmOptionsBuilder {
    population_size: Option<usize>,
    offspring_size: Option<usize>,
    archive_size: Option<usize>,
    max_evaluations: Option<usize>,
    max_generations_without_improvement: Option<usize>,
    log_level: Option<LogLevel>,
}

impl AlgorithmOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn offspring_size(mut self, value: usize) -> Self {
        self.offspring_size = Some(value);
        self
    }

    pub fn archive_size(mut self, value: usize) -> Self {
        self.archive_size = Some(value);
        self
    }

    /// Sets the evaluation budget and disables the stagnation criterion.
    pub fn max_evaluations(mut self, value: usize) -> Self {
        self.max_evaluations = Some(value);
        self.max_generations_without_improvement = Some(0);
        self
    }

    /// Sets the stagnation budget and disables the evaluation budget.
    pub fn max_generations_without_improvement(mut self, value: usize) -> Self {
        self.max_generations_without_improvement = Some(value);
        self.max_evaluations = Some(0);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds and validates the `AlgorithmOptions` instance.
    ///
    /// # Errors
    ///
    /// See [`AlgorithmOptions::validate`].
    pub fn build(self) -> Result<AlgorithmOptions> {
        let defaults = AlgorithmOptions::default();
        let options = AlgorithmOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            offspring_size: self.offspring_size.unwrap_or(defaults.offspring_size),
            archive_size: self.archive_size.unwrap_or(defaults.archive_size),
            max_evaluations: self.max_evaluations.unwrap_or(defaults.max_evaluations),
            max_generations_without_improvement: self
                .max_generations_without_improvement
                .unwrap_or(defaults.max_generations_without_improvement),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };
        options.validate()?;
        Ok(options)
    }
}
