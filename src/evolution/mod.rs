pub mod algorithm;
pub mod builder;
pub mod evaluator;
pub mod options;

pub use algorithm::{Algorithm, AlgorithmState, CancellationToken};
pub use builder::AlgorithmBuilder;
pub use evaluator::{Evaluator, ParallelEvaluator, SequentialEvaluator};
pub use options::{AlgorithmOptions, AlgorithmOptionsBuilder, LogLevel};
