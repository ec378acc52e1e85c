use super::{copy_parents, pair_mut, CrossoverOperator};
use crate::error::{ensure_probability, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

/// Swaps each variable between the two parents with probability 0.5.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct UniformCrossover {
    probability: f64,
}

impl UniformCrossover {
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability(probability, "crossover probability")?,
        })
    }
}

impl<V: Variable> CrossoverOperator<V> for UniformCrossover {
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

        if rng.next_double() < self.probability {
            let (first, second) = pair_mut(&mut children);
            for (a, b) in first
                .variables_mut()
                .iter_mut()
                .zip(second.variables_mut().iter_mut())
            {
                if rng.next_double() < 0.5 {
                    std::mem::swap(a, b);
                }
            }
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::solution::Bounds;

    #[test]
    fn test_genes_are_exchanged_position_wise() {
        let bounds: Arc<[Bounds<f64>]> = vec![Bounds::new(-10.0, 10.0).unwrap(); 8].into();
        let a = Solution::new(vec![-1.0; 8], Arc::clone(&bounds), 1, 0).unwrap();
        let b = Solution::new(vec![1.0; 8], bounds, 1, 0).unwrap();
        let crossover = UniformCrossover::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(21);

        let mut swapped = 0;
        for _ in 0..10 {
            let children = crossover.execute(&[a.clone(), b.clone()], &mut rng).unwrap();
            for (x, y) in children[0].variables().iter().zip(children[1].variables()) {
                assert_eq!(x + y, 0.0);
                if *x == 1.0 {
                    swapped += 1;
                }
            }
        }
        assert!(swapped > 0 && swapped < 80);
    }

    #[test]
    fn test_zero_probability() {
        let bounds: Arc<[Bounds<f64>]> = vec![Bounds::new(0.0, 1.0).unwrap(); 3].into();
        let a = Solution::new(vec![0.1, 0.2, 0.3], Arc::clone(&bounds), 1, 0).unwrap();
        let b = Solution::new(vec![0.7, 0.8, 0.9], bounds, 1, 0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let children = UniformCrossover::new(0.0)
            .unwrap()
            .execute(&[a.clone(), b.clone()], &mut rng)
            .unwrap();
        assert_eq!(children[0].variables(), a.variables());
        assert_eq!(children[1].variables(), b.variables());
    }
}
