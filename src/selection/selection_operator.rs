use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

/// Trait for selection operators.
///
/// A selection operator picks solutions from a population, either to form a mating pool
/// or to decide which solutions survive into the next generation. The returned solutions
/// are copies; the population is left untouched.
///
/// # Examples
///
/// ```
/// use pareto_ga::rng::RandomNumberGenerator;
/// use pareto_ga::selection::{SelectionOperator, TournamentSelection};
/// use pareto_ga::solution::Solution;
///
/// let population: Vec<Solution<f64>> = [[1.0, 4.0], [2.0, 2.0], [3.0, 3.0]]
///     .iter()
///     .map(|o| Solution::from_objectives(o.to_vec()))
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let selection = TournamentSelection::new(2).unwrap();
/// let pool = selection.execute(&population, 4, &mut rng).unwrap();
///
/// assert_eq!(pool.len(), 4);
/// ```
pub trait SelectionOperator<V: Variable>: Debug + Send + Sync {
    /// Selects `count` solutions from `population`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if the population is empty and `count > 0`, and
    /// propagates comparator failures.
    fn execute(
        &self,
        population: &[Solution<V>],
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>>;
}
