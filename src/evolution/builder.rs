use crate::{
    archive::{Archive, BoundedArchive},
    crossover::CrossoverOperator,
    error::{GeneticError, Result},
    mutation::MutationOperator,
    problem::Problem,
    rng::RandomNumberGenerator,
    selection::SelectionOperator,
    solution::Variable,
};

use super::{
    algorithm::{Algorithm, CancellationToken},
    evaluator::Evaluator,
    options::AlgorithmOptions,
};

/// Builder for `Algorithm`.
///
/// The problem, the evaluator and the three operators are required. The options default
/// to `AlgorithmOptions::default()`, the archive to a `BoundedArchive` sized by the
/// options, and the random number generator is seeded from entropy unless `with_seed` is
/// used.
///
/// # Examples
///
/// ```
/// use pareto_ga::crossover::CrossoverKind;
/// use pareto_ga::evolution::{AlgorithmBuilder, AlgorithmOptions, AlgorithmState, SequentialEvaluator};
/// use pareto_ga::mutation::MutationKind;
/// use pareto_ga::problem::{Problem, SimulationError};
/// use pareto_ga::selection::SelectionKind;
/// use pareto_ga::solution::Solution;
///
/// struct Schaffer;
///
/// impl Problem<f64> for Schaffer {
///     fn number_of_variables(&self) -> usize { 1 }
///     fn number_of_objectives(&self) -> usize { 2 }
///     fn lower_bound(&self, _index: usize) -> f64 { -10.0 }
///     fn upper_bound(&self, _index: usize) -> f64 { 10.0 }
///
///     fn evaluate(&self, solution: &mut Solution<f64>) -> Result<(), SimulationError> {
///         let x = solution.variables()[0];
///         solution.objectives_mut().copy_from_slice(&[x * x, (x - 2.0).powi(2)]);
///         Ok(())
///     }
/// }
///
/// fn main() -> pareto_ga::error::Result<()> {
///     let options = AlgorithmOptions::builder()
///         .population_size(20)
///         .offspring_size(20)
///         .archive_size(20)
///         .max_evaluations(400)
///         .build()?;
///
///     let mut algorithm = AlgorithmBuilder::new()
///         .with_problem(Schaffer)
///         .with_evaluator(SequentialEvaluator::new())
///         .with_selection(SelectionKind::Tournament { size: 2 }.build::<f64>()?)
///         .with_crossover(CrossoverKind::Sbx { probability: 0.9, distribution_index: 20.0 }.build()?)
///         .with_mutation(MutationKind::Polynomial { probability: 1.0, distribution_index: 20.0 }.build()?)
///         .with_options(options)
///         .with_seed(42)
///         .build()?;
///
///     assert_eq!(algorithm.run()?, AlgorithmState::Completed);
///     assert!(algorithm.result().len() <= 20);
///     Ok(())
/// }
/// ```
pub struct AlgorithmBuilder<V: Variable, P, E> {
    problem: Option<P>,
    evaluator: Option<E>,
    selection: Option<Box<dyn SelectionOperator<V>>>,
    crossover: Option<Box<dyn CrossoverOperator<V>>>,
    mutation: Option<Box<dyn MutationOperator<V>>>,
    archive: Option<Box<dyn Archive<V>>>,
    options: Option<AlgorithmOptions>,
    seed: Option<u64>,
    cancellation: Option<CancellationToken>,
}

impl<V, P, E> AlgorithmBuilder<V, P, E>
where
    V: Variable,
    P: Problem<V>,
    E: Evaluator<V, P>,
{
    pub fn new() -> Self {
        Self {
            problem: None,
            evaluator: None,
            selection: None,
            crossover: None,
            mutation: None,
            archive: None,
            options: None,
            seed: None,
            cancellation: None,
        }
    }

    pub fn with_problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn with_evaluator(mut self, evaluator: E) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_selection(mut self, selection: Box<dyn SelectionOperator<V>>) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_crossover(mut self, crossover: Box<dyn CrossoverOperator<V>>) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: Box<dyn MutationOperator<V>>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Replaces the default bounded archive.
    pub fn with_archive(mut self, archive: Box<dyn Archive<V>>) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn with_options(mut self, options: AlgorithmOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shares an existing cancellation token with the run.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Builds the `Algorithm`.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` if a required collaborator is missing and `InvalidArgument`
    /// if the options are invalid.
    pub fn build(self) -> Result<Algorithm<V, P, E>> {
        let problem = self
            .problem
            .ok_or_else(|| GeneticError::NullArgument("Problem not specified".to_string()))?;

        let evaluator = self
            .evaluator
            .ok_or_else(|| GeneticError::NullArgument("Evaluator not specified".to_string()))?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::NullArgument("Selection operator not specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            GeneticError::NullArgument("Crossover operator not specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            GeneticError::NullArgument("Mutation operator not specified".to_string())
        })?;

        let options = self.options.unwrap_or_default();
        options.validate()?;

        if crossover.required_parents() == 0 {
            return Err(GeneticError::InvalidArgument(
                "crossover must require at least one parent".to_string(),
            ));
        }

        let archive: Box<dyn Archive<V>> = match self.archive {
            Some(archive) => archive,
            None => Box::new(BoundedArchive::new(options.get_archive_size())?),
        };

        let rng = match self.seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        Ok(Algorithm::new(
            problem,
            evaluator,
            selection,
            crossover,
            mutation,
            archive,
            options,
            rng,
            self.cancellation.unwrap_or_default(),
        ))
    }
}

impl<V, P, E> Default for AlgorithmBuilder<V, P, E>
where
    V: Variable,
    P: Problem<V>,
    E: Evaluator<V, P>,
{
    fn default() -> Self {
        Self::new()
    }
}
