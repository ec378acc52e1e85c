//! # Quality Indicators
//!
//! Post-hoc scalar metrics comparing an obtained front to a reference. They are used
//! after a run (or between runs) and never by the evolutionary loop itself.

pub mod front;
pub mod hypervolume;

use crate::error::Result;

pub use front::Front;
pub use hypervolume::{Hypervolume, HypervolumeAlgorithm, SlicingHypervolume, SweepHypervolume2d};

/// A scalar quality indicator over a front.
pub trait QualityIndicator {
    fn name(&self) -> &str;

    /// `true` if smaller indicator values mean better fronts.
    fn is_the_lower_the_better(&self) -> bool;

    fn evaluate(&self, front: &Front) -> Result<f64>;
}
