//! # Algorithm
//!
//! The `Algorithm` drives a run generation by generation. It owns the population, the
//! archive and the random number generator, so a run is reproducible from its seed.
//!
//! A run moves through the states `NotStarted -> Running -> {Completed | Cancelled |
//! Failed}`. The first `step` creates, evaluates and archives the initial population;
//! every further `step` runs one generation:
//!
//! 1. select a mating pool from the population,
//! 2. recombine and mutate it into the offspring,
//! 3. evaluate the offspring and offer them to the archive,
//! 4. keep the best `population_size` of parents and offspring (ranking and crowding).
//!
//! Cancellation is cooperative: the `CancellationToken` is only checked between
//! generations, never while a batch is being evaluated. A failing evaluation moves the run
//! to `Failed` and is returned to the caller; the archive keeps everything found so far.
//!
//! Use `AlgorithmBuilder` to create an `Algorithm`.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::evaluator::Evaluator;
use super::options::{AlgorithmOptions, LogLevel};
use crate::archive::Archive;
use crate::comparator::{DominanceComparator, ObjectiveComparator, SolutionComparator};
use crate::crossover::CrossoverOperator;
use crate::error::{GeneticError, Result};
use crate::mutation::MutationOperator;
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::selection::{RankingAndCrowdingSelection, SelectionOperator};
use crate::solution::{AttributeKey, AttributeValue, Solution, Variable};

/// The lifecycle of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl AlgorithmState {
    /// Whether the run is over.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AlgorithmState::Completed | AlgorithmState::Cancelled | AlgorithmState::Failed
        )
    }
}

/// A cloneable handle to request the cancellation of a run from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The run stops at the next generation boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::SeqCst)
    }
}

/// An evolutionary run. See the module documentation.
pub struct Algorithm<V: Variable, P, E> {
    problem: P,
    evaluator: E,
    selection: Box<dyn SelectionOperator<V>>,
    crossover: Box<dyn CrossoverOperator<V>>,
    mutation: Box<dyn MutationOperator<V>>,
    replacement: RankingAndCrowdingSelection,
    archive: Box<dyn Archive<V>>,
    options: AlgorithmOptions,
    rng: RandomNumberGenerator,
    cancellation: CancellationToken,
    state: AlgorithmState,
    population: Vec<Solution<V>>,
    generation: usize,
    evaluations: usize,
    generations_without_improvement: usize,
}

impl<V, P, E> Algorithm<V, P, E>
where
    V: Variable,
    P: Problem<V>,
    E: Evaluator<V, P>,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        problem: P,
        evaluator: E,
        selection: Box<dyn SelectionOperator<V>>,
        crossover: Box<dyn CrossoverOperator<V>>,
        mutation: Box<dyn MutationOperator<V>>,
        archive: Box<dyn Archive<V>>,
        options: AlgorithmOptions,
        rng: RandomNumberGenerator,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            problem,
            evaluator,
            selection,
            crossover,
            mutation,
            replacement: RankingAndCrowdingSelection::new(),
            archive,
            options,
            rng,
            cancellation,
            state: AlgorithmState::NotStarted,
            population: Vec::new(),
            generation: 0,
            evaluations: 0,
            generations_without_improvement: 0,
        }
    }

    pub fn state(&self) -> AlgorithmState {
        self.state
    }

    /// The number of completed generations; the initial population is generation 0.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn options(&self) -> &AlgorithmOptions {
        &self.options
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The current population, ranked and carrying crowding distances.
    pub fn population(&self) -> &[Solution<V>] {
        &self.population
    }

    pub fn archive(&self) -> &dyn Archive<V> {
        self.archive.as_ref()
    }

    /// The non-dominated solutions found so far.
    pub fn result(&self) -> &[Solution<V>] {
        self.archive.solutions()
    }

    /// A handle that cancels this run.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// The best solution of a single-objective run.
    ///
    /// Returns `None` before the first evaluation and for multi-objective problems, whose
    /// result is the whole archive.
    pub fn best_solution(&self) -> Result<Option<&Solution<V>>> {
        if self.problem.number_of_objectives() != 1 {
            return Ok(None);
        }

        let comparator = ObjectiveComparator::new(0);
        let mut best: Option<&Solution<V>> = None;
        for candidate in self.archive.solutions() {
            best = match best {
                Some(current)
                    if comparator.compare(candidate, current)? != std::cmp::Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            };
        }
        Ok(best)
    }

    /// Runs until the run completes, is cancelled or fails.
    ///
    /// # Errors
    ///
    /// Returns the error that failed the run, or `Evolution` if the run was already over.
    pub fn run(&mut self) -> Result<AlgorithmState> {
        loop {
            let state = self.step()?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }

    /// Advances the run by one generation (the first call creates the initial population)
    /// and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `Evolution` if the run is already over. Any other error fails the run.
    pub fn step(&mut self) -> Result<AlgorithmState> {
        if self.state.is_terminal() {
            return Err(GeneticError::Evolution(format!(
                "cannot step a run in state {:?}",
                self.state
            )));
        }

        if self.cancellation.is_cancelled() {
            self.state = AlgorithmState::Cancelled;
            warn!(
                generation = self.generation,
                evaluations = self.evaluations,
                archive_size = self.archive.size(),
                "run cancelled"
            );
            return Ok(self.state);
        }

        let outcome = match self.state {
            AlgorithmState::NotStarted => {
                self.state = AlgorithmState::Running;
                info!(
                    problem = self.problem.name(),
                    population_size = self.options.get_population_size(),
                    "starting run"
                );
                self.initialize()
            }
            _ => self.evolve_generation(),
        };

        if let Err(e) = outcome {
            self.state = AlgorithmState::Failed;
            error!(
                generation = self.generation,
                evaluations = self.evaluations,
                error = %e,
                "run failed"
            );
            return Err(e);
        }

        self.log_progress();

        if self.is_finished() {
            self.state = AlgorithmState::Completed;
            info!(
                generation = self.generation,
                evaluations = self.evaluations,
                archive_size = self.archive.size(),
                "run completed"
            );
        }

        Ok(self.state)
    }

    fn initialize(&mut self) -> Result<()> {
        let mut population = Vec::with_capacity(self.options.get_population_size());
        for _ in 0..self.options.get_population_size() {
            let mut solution = self.problem.create_solution(&mut self.rng)?;
            solution.set_attribute(AttributeKey::Generation, AttributeValue::Integer(0));
            population.push(solution);
        }

        self.evaluator.evaluate(&mut population, &self.problem)?;
        self.evaluations += population.len();

        for solution in &population {
            self.archive.add(solution.clone())?;
        }

        self.population =
            self.replacement
                .execute(&population, population.len(), &mut self.rng)?;
        Ok(())
    }

    fn evolve_generation(&mut self) -> Result<()> {
        let offspring_count = self.offspring_count();
        let required = self.crossover.required_parents();
        let produced = self.crossover.produced_children().max(1);
        let matings = offspring_count.div_ceil(produced);

        let mating_pool =
            self.selection
                .execute(&self.population, matings * required, &mut self.rng)?;

        let next_generation = self.generation + 1;
        let mut offspring = Vec::with_capacity(offspring_count);
        for parents in mating_pool.chunks(required) {
            for mut child in self.crossover.execute(parents, &mut self.rng)? {
                if offspring.len() == offspring_count {
                    break;
                }
                self.mutation.execute(&mut child, &mut self.rng)?;
                child.set_attribute(
                    AttributeKey::Generation,
                    AttributeValue::Integer(next_generation as i64),
                );
                offspring.push(child);
            }
        }

        self.evaluator.evaluate(&mut offspring, &self.problem)?;
        self.evaluations += offspring.len();

        // an improvement is an accepted child that dominates a member it displaces;
        // a child pruned right away or merely filling a gap in the front does not count
        let dominance = DominanceComparator::new();
        let mut improved = false;
        for child in &offspring {
            let mut dominates_member = false;
            for member in self.archive.solutions() {
                if dominance.dominates(child, member)? {
                    dominates_member = true;
                    break;
                }
            }
            if self.archive.add(child.clone())? && dominates_member {
                improved = true;
            }
        }
        if improved {
            self.generations_without_improvement = 0;
        } else {
            self.generations_without_improvement += 1;
        }

        let mut merged = self.population.clone();
        merged.extend(offspring);
        self.population = self.replacement.execute(
            &merged,
            self.options.get_population_size().min(merged.len()),
            &mut self.rng,
        )?;
        self.generation = next_generation;
        Ok(())
    }

    /// The offspring of the next generation, capped by the remaining evaluation budget.
    fn offspring_count(&self) -> usize {
        let offspring = self.options.get_offspring_size();
        match self.options.get_max_evaluations() {
            0 => offspring,
            budget => offspring.min(budget.saturating_sub(self.evaluations)),
        }
    }

    fn is_finished(&self) -> bool {
        let budget = self.options.get_max_evaluations();
        let stagnation = self.options.get_max_generations_without_improvement();
        (budget > 0 && self.evaluations >= budget)
            || (stagnation > 0 && self.generations_without_improvement >= stagnation)
    }

    fn log_progress(&self) {
        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => self.log_generation(),
            LogLevel::Verbose => {
                self.log_generation();
                for solution in self.archive.solutions() {
                    debug!(
                        generation = self.generation,
                        objectives = ?solution.objectives(),
                        variables = ?solution.variables(),
                        "archive member"
                    );
                }
            }
        }
    }

    fn log_generation(&self) {
        info!(
            generation = self.generation,
            evaluations = self.evaluations,
            archive_size = self.archive.size(),
            stagnation = self.generations_without_improvement,
            "generation completed"
        );
    }
}

impl<V, P, E> fmt::Debug for Algorithm<V, P, E>
where
    V: Variable,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("evaluations", &self.evaluations)
            .field("evaluator", &self.evaluator)
            .field("selection", &self.selection)
            .field("crossover", &self.crossover)
            .field("mutation", &self.mutation)
            .field("archive_size", &self.archive.solutions().len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!AlgorithmState::NotStarted.is_terminal());
        assert!(!AlgorithmState::Running.is_terminal());
        assert!(AlgorithmState::Completed.is_terminal());
        assert!(AlgorithmState::Cancelled.is_terminal());
        assert!(AlgorithmState::Failed.is_terminal());
    }

    #[test]
    fn test_cancellation_token_is_shared() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
