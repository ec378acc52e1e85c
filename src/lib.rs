//! # pareto-ga
//!
//! A multi-objective evolutionary optimization engine. Candidate solutions are evolved
//! toward better trade-offs between competing objectives using Pareto dominance,
//! non-dominated ranking, crowding-distance diversity preservation and bounded archives.
//! The hypervolume indicator measures the quality of the fronts it finds.
//!
//! The engine knows nothing about the system being optimized: a `Problem` declares the
//! decision variables and evaluates solutions, usually by calling an external simulator.
//! All objectives are minimized.

pub mod archive;
pub mod comparator;
pub mod crossover;
pub mod density;
pub mod error;
pub mod evolution;
pub mod indicator;
pub mod mutation;
pub mod problem;
pub mod ranking;
pub mod rng;
pub mod selection;
pub mod solution;

// Re-export commonly used types for convenience
pub use archive::{Archive, BoundedArchive, NonDominatedArchive};
pub use comparator::{DominanceComparator, SolutionComparator};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{
    Algorithm, AlgorithmBuilder, AlgorithmOptions, AlgorithmState, CancellationToken,
    Evaluator, LogLevel, ParallelEvaluator, SequentialEvaluator,
};
pub use indicator::{Front, Hypervolume, QualityIndicator};
pub use problem::{Problem, SimulationError};
pub use ranking::{DominanceRanking, Ranking};
pub use rng::RandomNumberGenerator;
pub use solution::{AttributeKey, AttributeValue, Bounds, Solution, Variable};
