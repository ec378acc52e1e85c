use super::{copy_parents, pair_mut, CrossoverOperator};
use crate::error::{ensure_probability, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::{Solution, Variable};

/// Swaps the variable suffixes of two parents after a random cut index.
///
/// The cut is drawn uniformly in `[0, n)`; a cut at 0 swaps every variable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability(probability, "crossover probability")?,
        })
    }
}

impl<V: Variable> CrossoverOperator<V> for SinglePointCrossover {
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
            let n = children[0].number_of_variables();
            if n > 0 {
                let cut = rng.next_int(n)?;
                let (first, second) = pair_mut(&mut children);
                first.variables_mut()[cut..].swap_with_slice(&mut second.variables_mut()[cut..]);
            }
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::GeneticError;
    use crate::solution::{AttributeKey, AttributeValue, Bounds};

    fn parents() -> Vec<Solution<i32>> {
        let bounds: Arc<[Bounds<i32>]> = vec![Bounds::new(0, 100).unwrap(); 5].into();
        let mut a = Solution::new(vec![1, 2, 3, 4, 5], Arc::clone(&bounds), 2, 0).unwrap();
        a.set_attribute(AttributeKey::Rank, AttributeValue::Integer(0));
        let b = Solution::new(vec![10, 20, 30, 40, 50], bounds, 2, 0).unwrap();
        vec![a, b]
    }

    #[test]
    fn test_zero_probability_copies_parents_in_order() {
        let parents = parents();
        let crossover = SinglePointCrossover::new(0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let children = crossover.execute(&parents, &mut rng).unwrap();
        assert_eq!(children[0].variables(), parents[0].variables());
        assert_eq!(children[1].variables(), parents[1].variables());
        assert!(children[0].rank().is_none());
    }

    #[test]
    fn test_children_swap_a_suffix() {
        let parents = parents();
        let crossover = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);

        for _ in 0..20 {
            let children = crossover.execute(&parents, &mut rng).unwrap();
            let first = children[0].variables();
            let cut = first
                .iter()
                .zip(parents[0].variables())
                .position(|(c, p)| c != p)
                .expect("a cut in [0, n) always swaps at least one variable");
            assert_eq!(&first[..cut], &parents[0].variables()[..cut]);
            assert_eq!(&first[cut..], &parents[1].variables()[cut..]);
            assert_eq!(&children[1].variables()[cut..], &parents[0].variables()[cut..]);
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let parents = parents();
        let crossover = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(matches!(
            crossover.execute(&parents[..1], &mut rng),
            Err(GeneticError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_probability() {
        assert!(SinglePointCrossover::new(-0.1).is_err());
        assert!(SinglePointCrossover::new(1.1).is_err());
    }
}
