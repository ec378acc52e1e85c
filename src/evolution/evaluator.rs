//! # Evaluators
//!
//! An evaluator scores a batch of solutions by handing each of them to the problem. It is
//! the single point where the engine talks to the external simulator, so it can be swapped
//! or instrumented without touching the driver.
//!
//! `SequentialEvaluator` evaluates one solution at a time, in order, and is the only safe
//! choice for simulators that cannot run concurrently. `ParallelEvaluator` spreads large
//! batches over the rayon thread pool; it is only available for problems that are `Sync`.

use std::fmt::Debug;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{GeneticError, Result};
use crate::problem::Problem;
use crate::solution::{Solution, Variable};

/// Fills in the objective and constraint values of a batch of solutions.
pub trait Evaluator<V: Variable, P: Problem<V>>: Debug + Send + Sync {
    /// Evaluates every solution of `solutions` against `problem`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Simulation` with the first failure reported by the problem.
    /// Solutions after the failing one may be left unevaluated.
    fn evaluate(&self, solutions: &mut [Solution<V>], problem: &P) -> Result<()>;
}

/// Evaluates solutions strictly one after the other.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEvaluator;

impl SequentialEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl<V: Variable, P: Problem<V>> Evaluator<V, P> for SequentialEvaluator {
    fn evaluate(&self, solutions: &mut [Solution<V>], problem: &P) -> Result<()> {
        for solution in solutions.iter_mut() {
            problem.evaluate(solution)?;
        }
        Ok(())
    }
}

/// Evaluates batches of at least `threshold` solutions in parallel.
///
/// Smaller batches are evaluated sequentially, as the thread hand-off would dominate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ParallelEvaluator {
    threshold: usize,
}

impl ParallelEvaluator {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for ParallelEvaluator {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl<V, P> Evaluator<V, P> for ParallelEvaluator
where
    V: Variable,
    P: Problem<V> + Sync,
{
    fn evaluate(&self, solutions: &mut [Solution<V>], problem: &P) -> Result<()> {
        if solutions.len() < self.threshold {
            return SequentialEvaluator.evaluate(solutions, problem);
        }

        debug!(batch = solutions.len(), "evaluating batch in parallel");
        solutions
            .par_iter_mut()
            .try_for_each(|solution| problem.evaluate(solution))
            .map_err(GeneticError::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::problem::SimulationError;

    struct Sphere {
        calls: AtomicUsize,
        fail_at: Option<usize>,
    }

    impl Sphere {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_at,
            }
        }
    }

    impl Problem<f64> for Sphere {
        fn number_of_variables(&self) -> usize {
            2
        }

        fn number_of_objectives(&self) -> usize {
            1
        }

        fn lower_bound(&self, _index: usize) -> f64 {
            -1.0
        }

        fn upper_bound(&self, _index: usize) -> f64 {
            1.0
        }

        fn evaluate(&self, solution: &mut Solution<f64>) -> std::result::Result<(), SimulationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if Some(call) == self.fail_at {
                return Err(SimulationError::new("solver diverged"));
            }
            let value: f64 = solution.variables().iter().map(|x| x * x).sum();
            solution.objectives_mut()[0] = value;
            Ok(())
        }
    }

    fn batch(problem: &Sphere, n: usize) -> Vec<Solution<f64>> {
        let mut rng = crate::rng::RandomNumberGenerator::from_seed(1);
        (0..n)
            .map(|_| problem.create_solution(&mut rng).unwrap())
            .collect()
    }

    #[test]
    fn test_sequential_evaluates_everything() {
        let problem = Sphere::new(None);
        let mut solutions = batch(&problem, 5);

        SequentialEvaluator.evaluate(&mut solutions, &problem).unwrap();

        for s in &solutions {
            let expected: f64 = s.variables().iter().map(|x| x * x).sum();
            assert_eq!(s.objectives()[0], expected);
        }
        assert_eq!(problem.calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_sequential_stops_at_first_failure() {
        let problem = Sphere::new(Some(2));
        let mut solutions = batch(&problem, 5);

        let result = SequentialEvaluator.evaluate(&mut solutions, &problem);

        match result {
            Err(GeneticError::Simulation(e)) => assert_eq!(e.message(), "solver diverged"),
            other => panic!("Expected Simulation error, got {:?}", other),
        }
        assert_eq!(problem.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = Sphere::new(None);
        let mut parallel = batch(&problem, 64);
        let mut sequential = parallel.clone();

        ParallelEvaluator::new(8)
            .evaluate(&mut parallel, &problem)
            .unwrap();
        SequentialEvaluator.evaluate(&mut sequential, &problem).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_propagates_failure() {
        let problem = Sphere::new(Some(10));
        let mut solutions = batch(&problem, 32);

        let result = ParallelEvaluator::new(1).evaluate(&mut solutions, &problem);
        assert!(matches!(result, Err(GeneticError::Simulation(_))));
    }
}
