use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::solution::{Solution, Variable};

/// Selects solutions uniformly at random, with replacement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<V: Variable> SelectionOperator<V> for RandomSelection {
    fn execute(
        &self,
        population: &[Solution<V>],
        count: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.next_int(population.len())?;
            selected.push(population[index].clone());
        }
        Ok(selected)
    }
}
