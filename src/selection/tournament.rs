use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{ChainedComparator, SolutionComparator};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::solution::{Solution, Variable};

/// A selection operator that selects solutions through k-way tournaments.
///
/// Each tournament draws `tournament_size` distinct contestants uniformly at random and
/// keeps the one the comparator prefers; among contestants the comparator cannot tell
/// apart the first drawn wins. Tournaments are repeated until enough solutions are
/// selected, so the same solution may be selected several times.
///
/// The default comparator is dominance with crowding distance as tie-break, which
/// expects the population to carry crowding distances (solutions without one count as
/// 0.0).
///
/// - Smaller tournament sizes lead to more exploration.
/// - Larger tournament sizes lead to more exploitation.
pub struct TournamentSelection<V> {
    tournament_size: usize,
    comparator: Box<dyn SolutionComparator<V>>,
}

impl<V: Variable> TournamentSelection<V> {
    /// Creates a tournament selection with the dominance-then-crowding comparator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        Self::with_comparator(
            tournament_size,
            Box::new(ChainedComparator::dominance_then_crowding()),
        )
    }

    pub fn with_comparator(
        tournament_size: usize,
        comparator: Box<dyn SolutionComparator<V>>,
    ) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidArgument(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            comparator,
        })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// Contestants are drawn without replacement with a partial Fisher-Yates shuffle; the
    /// tournament size is clamped to the population size.
    fn run_tournament(
        &self,
        population: &[Solution<V>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let n = population.len();
        let k = self.tournament_size.min(n);

        let mut indices: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = i + rng.next_int(n - i)?;
            indices.swap(i, j);
        }

        let mut best = indices[0];
        for &contestant in &indices[1..k] {
            if self
                .comparator
                .compare(&population[contestant], &population[best])?
                == Ordering::Less
            {
                best = contestant;
            }
        }

        Ok(best)
    }
}

impl<V> fmt::Debug for TournamentSelection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TournamentSelection")
            .field("tournament_size", &self.tournament_size)
            .field("comparator", &self.comparator)
            .finish()
    }
}

impl<V: Variable> SelectionOperator<V> for TournamentSelection<V> {
    fn execute(
        &self,
        population: &[Solution<V>],
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut selected = Vec::with_capacity(count);
        while selected.len() < count {
            let winner = self.run_tournament(population, rng)?;
            selected.push(population[winner].clone());
        }

        Ok(selected)
    }
}
