use std::cmp::Ordering;

use tracing::trace;

use super::{Archive, NonDominatedArchive};
use crate::comparator::SolutionComparator;
use crate::density::{CrowdingDistance, DensityEstimator};
use crate::error::{GeneticError, Result};
use crate::solution::{Solution, Variable};

/// A `NonDominatedArchive` capped at `max_size` members.
///
/// When a successful insertion takes the archive over capacity, the density of every
/// member is recomputed and exactly one member is removed: the one with the lowest
/// density value, i.e. the one in the most crowded region. Among equally crowded members
/// the latest in archive order goes.
///
/// # Examples
///
/// ```
/// use pareto_ga::archive::{Archive, BoundedArchive};
/// use pareto_ga::solution::Solution;
///
/// let mut archive = BoundedArchive::<f64>::new(2).unwrap();
/// for point in [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]] {
///     archive.add(Solution::from_objectives(point.to_vec())).unwrap();
/// }
///
/// assert_eq!(archive.size(), 2);
/// assert!(archive.solutions().iter().all(|s| s.objectives() != [3.0, 3.0]));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedArchive<V, D = CrowdingDistance> {
    archive: NonDominatedArchive<V>,
    max_size: usize,
    density: D,
}

impl<V: Variable> BoundedArchive<V, CrowdingDistance> {
    /// A bounded archive pruned by crowding distance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        Self::with_density_estimator(max_size, CrowdingDistance::new())
    }
}

impl<V, D> BoundedArchive<V, D>
where
    V: Variable,
    D: DensityEstimator<V>,
{
    /// A bounded archive pruned by the given density estimator.
    pub fn with_density_estimator(max_size: usize, density: D) -> Result<Self> {
        if max_size == 0 {
            return Err(GeneticError::InvalidArgument(
                "archive size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            archive: NonDominatedArchive::new(),
            max_size,
            density,
        })
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Recomputes the density attribute of every member.
    pub fn compute_density(&mut self) -> Result<()> {
        self.density.compute(self.archive.solutions_mut())
    }

    /// Removes the most crowded member and returns it.
    pub fn prune(&mut self) -> Result<Option<Solution<V>>> {
        if self.archive.is_empty() {
            return Ok(None);
        }
        self.compute_density()?;

        let comparator = self.density.comparator();
        let members = self.archive.solutions();
        let mut worst = 0;
        for index in 1..members.len() {
            if comparator.compare(&members[index], &members[worst])? != Ordering::Less {
                worst = index;
            }
        }

        let removed = self.archive.remove(worst);
        trace!(index = worst, size = self.archive.size(), "pruned archive member");
        Ok(Some(removed))
    }

    pub fn into_solutions(self) -> Vec<Solution<V>> {
        self.archive.into_solutions()
    }
}

impl<V, D> Archive<V> for BoundedArchive<V, D>
where
    V: Variable,
    D: DensityEstimator<V>,
{
    fn add(&mut self, solution: Solution<V>) -> Result<bool> {
        let added = self.archive.add(solution)?;
        if added && self.archive.size() > self.max_size {
            self.prune()?;
        }
        Ok(added)
    }

    fn solutions(&self) -> &[Solution<V>] {
        self.archive.solutions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::HypervolumeContribution;

    fn point(objectives: &[f64]) -> Solution<f64> {
        Solution::from_objectives(objectives.to_vec())
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            BoundedArchive::<f64>::new(0),
            Err(GeneticError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_prunes_lowest_crowding_distance() {
        let mut archive = BoundedArchive::new(2).unwrap();
        archive.add(point(&[1.0, 4.0])).unwrap();
        archive.add(point(&[2.5, 2.5])).unwrap();
        archive.add(point(&[4.0, 1.0])).unwrap();

        assert_eq!(archive.size(), 2);
        let kept: Vec<&[f64]> = archive.solutions().iter().map(|s| s.objectives()).collect();
        assert_eq!(kept, vec![&[1.0, 4.0][..], &[4.0, 1.0][..]]);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut archive = BoundedArchive::new(5).unwrap();
        for i in 0..50 {
            let x = i as f64 / 49.0;
            archive.add(point(&[x, 1.0 - x])).unwrap();
            assert!(archive.size() <= 5);
        }
        assert_eq!(archive.size(), 5);
        // the extremes are always preserved
        assert!(archive.solutions().iter().any(|s| s.objectives() == [0.0, 1.0]));
        assert!(archive.solutions().iter().any(|s| s.objectives() == [1.0, 0.0]));
    }

    #[test]
    fn test_dominated_candidate_does_not_prune() {
        let mut archive = BoundedArchive::new(2).unwrap();
        archive.add(point(&[1.0, 4.0])).unwrap();
        archive.add(point(&[4.0, 1.0])).unwrap();
        assert!(!archive.add(point(&[5.0, 5.0])).unwrap());
        assert_eq!(archive.size(), 2);
    }

    #[test]
    fn test_hypervolume_pruning_policy() {
        let mut archive =
            BoundedArchive::with_density_estimator(3, HypervolumeContribution::default()).unwrap();
        for p in [[0.0, 4.0], [1.9, 2.1], [2.0, 2.0], [4.0, 0.0]] {
            archive.add(point(&p)).unwrap();
        }
        assert_eq!(archive.size(), 3);
        assert!(archive.solutions().iter().all(|s| s.objectives() != [1.9, 2.1]));
    }
}
