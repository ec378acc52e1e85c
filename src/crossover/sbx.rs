use super::{copy_parents, pair_mut, CrossoverOperator};
use crate::error::{ensure_probability, GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Bounds, Solution, Variable};

const EPSILON: f64 = 1.0e-14;

/// Simulated binary crossover (Deb & Agrawal, 1995).
///
/// Each variable is recombined with probability 0.5. The spread of the children around
/// the parents is controlled by the distribution index: larger values keep the children
/// closer to their parents. Children are clamped into the variable bounds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
}

impl SbxCrossover {
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
            probability: ensure_probability(probability, "crossover probability")?,
            distribution_index,
        })
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    /// Spread factor for one side, `beta` being the distance to the bound in units of
    /// the parent distance.
    fn spread(&self, beta: f64, u: f64) -> f64 {
        let exponent = self.distribution_index + 1.0;
        let alpha = 2.0 - beta.powf(-exponent);
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / exponent)
        }
    }

    fn recombine<V: Variable>(
        &self,
        x1: f64,
        x2: f64,
        bounds: &Bounds<V>,
        rng: &mut RandomNumberGenerator,
    ) -> (V, V) {
        let lower = bounds.lower().to_f64();
        let upper = bounds.upper().to_f64();
        let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let distance = y2 - y1;

        let u = rng.next_double();
        let beta_low = 1.0 + 2.0 * (y1 - lower) / distance;
        let c1 = 0.5 * ((y1 + y2) - self.spread(beta_low, u) * distance);
        let beta_high = 1.0 + 2.0 * (upper - y2) / distance;
        let c2 = 0.5 * ((y1 + y2) + self.spread(beta_high, u) * distance);

        let (c1, c2) = (bounds.clamp_f64(c1), bounds.clamp_f64(c2));
        if rng.next_double() < 0.5 {
            (c2, c1)
        } else {
            (c1, c2)
        }
    }
}

impl<V: Variable> CrossoverOperator<V> for SbxCrossover {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn required_parents(&self) -> usize {
        2
    }

    fn produced_children(&self) -> usize {
        2
    }

    fn execute(
        &self,
        parents: &[Solution<V>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>> {
        let mut children = copy_parents(parents, 2)?;
        if rng.next_double() >= self.probability {
            return Ok(children);
        }

        let bounds = children[0].shared_bounds();
        let (first, second) = pair_mut(&mut children);
        let pairs = first
            .variables_mut()
            .iter_mut()
            .zip(second.variables_mut().iter_mut());

        for ((a, b), bounds) in pairs.zip(bounds.iter()) {
            if rng.next_double() > 0.5 {
                continue;
            }
            let (x1, x2) = (a.to_f64(), b.to_f64());
            if (x1 - x2).abs() <= EPSILON {
                continue;
            }
            let (c1, c2) = self.recombine(x1, x2, bounds, rng);
            *a = c1;
            *b = c2;
        }

        Ok(children)
    }
}
