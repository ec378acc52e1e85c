use super::MutationOperator;
use crate::error::{ensure_probability, GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Bounds, Solution, Variable};

/// Polynomial mutation (Deb & Goyal, 1996).
///
/// The step is drawn from a polynomial distribution scaled to the width of the bounds;
/// a larger distribution index yields smaller steps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
}

impl PolynomialMutation {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is outside `[0, 1]` or
    /// `distribution_index` is negative or not finite.
    pub fn new(probability: f64, distribution_index: f64) -> Result<Self> {
        if !distribution_index.is_finite() || distribution_index < 0.0 {
            return Err(GeneticError::InvalidArgument(format!(
                "distribution index must be non-negative, got {}",
                distribution_index
            )));
        }
        Ok(Self {
            probability: ensure_probability(probability, "mutation probability")?,
            distribution_index,
        })
    }

    fn mutate<V: Variable>(&self, value: f64, bounds: &Bounds<V>, u: f64) -> V {
        let lower = bounds.lower().to_f64();
        let width = bounds.width();
        if width <= 0.0 {
            return bounds.clamp_f64(value);
        }

        let exponent = self.distribution_index + 1.0;
        let delta1 = (value - lower) / width;
        let delta2 = 1.0 - delta1;

        let deltaq = if u < 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(exponent);
            val.powf(1.0 / exponent) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(exponent);
            1.0 - val.powf(1.0 / exponent)
        };

        bounds.clamp_f64(value + deltaq * width)
    }
}

impl<V: Variable> MutationOperator<V> for PolynomialMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(&self, solution: &mut Solution<V>, rng: &mut RandomNumberGenerator) -> Result<()> {
        let bounds = solution.shared_bounds();
        for (variable, bounds) in solution.variables_mut().iter_mut().zip(bounds.iter()) {
            if rng.next_double() < self.probability {
                let u = rng.next_double();
                *variable = self.mutate(variable.to_f64(), bounds, u);
            }
        }
        Ok(())
    }
}
