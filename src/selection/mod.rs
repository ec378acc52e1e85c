//! # Selection
//!
//! Selection operators pick solutions from a population: parents for the mating pool
//! (`TournamentSelection`, `RandomSelection`) or survivors for the next generation
//! (`RankingAndCrowdingSelection`). `SelectionKind` names an operator as plain
//! configuration and builds it on demand.

pub mod random;
pub mod ranking_and_crowding;
pub mod selection_operator;
pub mod tournament;

use crate::error::Result;
use crate::solution::Variable;

pub use random::RandomSelection;
pub use ranking_and_crowding::RankingAndCrowdingSelection;
pub use selection_operator::SelectionOperator;
pub use tournament::TournamentSelection;

/// The available selection operators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// k-way tournament with dominance and crowding distance.
    Tournament { size: usize },
    Random,
    RankingAndCrowding,
}

impl Default for SelectionKind {
    fn default() -> Self {
        SelectionKind::Tournament { size: 2 }
    }
}

impl SelectionKind {
    /// Builds the operator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a tournament size of 0.
    pub fn build<V: Variable>(&self) -> Result<Box<dyn SelectionOperator<V>>> {
        let operator: Box<dyn SelectionOperator<V>> = match *self {
            SelectionKind::Tournament { size } => Box::new(TournamentSelection::new(size)?),
            SelectionKind::Random => Box::new(RandomSelection::new()),
            SelectionKind::RankingAndCrowding => Box::new(RankingAndCrowdingSelection::new()),
        };
        Ok(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_build_validates_configuration() {
        assert!(SelectionKind::default().build::<f64>().is_ok());
        assert!(SelectionKind::Random.build::<i32>().is_ok());
        assert!(matches!(
            SelectionKind::Tournament { size: 0 }.build::<f64>(),
            Err(GeneticError::InvalidArgument(_))
        ));
    }
}
