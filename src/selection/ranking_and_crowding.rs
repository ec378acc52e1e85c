use std::cmp::Ordering;

use crate::comparator::{DensityComparator, SolutionComparator};
use crate::density::{CrowdingDistance, DensityEstimator};
use crate::error::{GeneticError, Result};
use crate::ranking::DominanceRanking;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_operator::SelectionOperator;
use crate::solution::{Solution, Variable};

/// NSGA-II environmental selection.
///
/// The population is ranked into non-dominated sub-fronts, which are taken whole in rank
/// order while they fit. The first sub-front that does not fit is truncated to its least
/// crowded members. Every selected solution carries its `Rank` and `CrowdingDistance`
/// attributes, ready for a crowded tournament.
///
/// The selection is deterministic; the random number generator is not used.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RankingAndCrowdingSelection {
    ranking: DominanceRanking,
    crowding: CrowdingDistance,
}

impl RankingAndCrowdingSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stable sort through a fallible comparator; the first comparison error is returned.
pub(crate) fn sort_solutions<V, C>(solutions: &mut [Solution<V>], comparator: &C) -> Result<()>
where
    V: Variable,
    C: SolutionComparator<V>,
{
    let mut error = None;
    solutions.sort_by(|a, b| {
        comparator.compare(a, b).unwrap_or_else(|e| {
            error.get_or_insert(e);
            Ordering::Equal
        })
    });
    match error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

impl<V: Variable> SelectionOperator<V> for RankingAndCrowdingSelection {
    fn execute(
        &self,
        population: &[Solution<V>],
        count: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if count > population.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "cannot select {} solutions out of {}",
                count,
                population.len()
            )));
        }

        let ranking = self.ranking.compute(population.to_vec())?;
        let comparator = DensityComparator::default();

        let mut selected = Vec::with_capacity(count);
        for mut front in ranking.into_subfronts() {
            self.crowding.compute(&mut front)?;

            let room = count - selected.len();
            if front.len() > room {
                sort_solutions(&mut front, &comparator)?;
                front.truncate(room);
            }
            selected.extend(front);

            if selected.len() == count {
                break;
            }
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(points: &[[f64; 2]]) -> Vec<Solution<f64>> {
        points
            .iter()
            .map(|p| Solution::from_objectives(p.to_vec()))
            .collect()
    }

    #[test]
    fn test_takes_whole_fronts_first() {
        let population = population(&[[5.0, 5.0], [1.0, 4.0], [4.0, 1.0], [6.0, 6.0], [2.0, 2.0]]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let selected = RankingAndCrowdingSelection::new()
            .execute(&population, 4, &mut rng)
            .unwrap();

        assert_eq!(selected.len(), 4);
        assert!(selected.iter().all(|s| s.objectives() != [6.0, 6.0]));
        assert_eq!(selected[3].objectives(), &[5.0, 5.0]);
        assert_eq!(selected[3].rank(), Some(1));
    }

    #[test]
    fn test_truncates_most_crowded_members() {
        let population = population(&[[1.0, 4.0], [2.0, 3.0], [2.1, 2.9], [4.0, 1.0]]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let selected = RankingAndCrowdingSelection::new()
            .execute(&population, 3, &mut rng)
            .unwrap();

        let kept: Vec<&[f64]> = selected.iter().map(|s| s.objectives()).collect();
        assert!(kept.contains(&&[1.0, 4.0][..]));
        assert!(kept.contains(&&[4.0, 1.0][..]));
        assert!(selected.iter().all(|s| s.crowding_distance().is_some()));
    }

    #[test]
    fn test_rejects_oversized_request() {
        let population = population(&[[1.0, 1.0]]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        assert!(matches!(
            RankingAndCrowdingSelection::new().execute(&population, 2, &mut rng),
            Err(GeneticError::InvalidArgument(_))
        ));
    }
}
