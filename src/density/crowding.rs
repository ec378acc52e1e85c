//! Crowding distance (Deb et al., 2002).
//!
//! For each objective the set is sorted; the solutions holding the minimum or maximum
//! value get an infinite distance, interior solutions accumulate the normalized gap
//! between their two neighbours. Objectives with a zero range are skipped.

use std::cmp::Ordering;

use super::{common_objective_count, DensityEstimator};
use crate::error::Result;
use crate::solution::{AttributeKey, AttributeValue, Solution, Variable};

/// The crowding distance density estimator.
///
/// # Examples
///
/// ```
/// use pareto_ga::density::{CrowdingDistance, DensityEstimator};
/// use pareto_ga::solution::Solution;
///
/// let mut front: Vec<Solution<f64>> = [[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]]
///     .iter()
///     .map(|o| Solution::from_objectives(o.to_vec()))
///     .collect();
///
/// CrowdingDistance::new().compute(&mut front).unwrap();
///
/// assert!(front[0].crowding_distance().unwrap().is_infinite());
/// assert!(front[3].crowding_distance().unwrap().is_infinite());
/// assert!(front[1].crowding_distance().unwrap().is_finite());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct CrowdingDistance;

impl CrowdingDistance {
    pub fn new() -> Self {
        Self
    }

    /// Computes the distances without attaching them.
    pub fn distances<V: Variable>(&self, solutions: &[Solution<V>]) -> Result<Vec<f64>> {
        let n = solutions.len();
        let m = common_objective_count(solutions)?;

        if n <= 2 {
            return Ok(vec![f64::INFINITY; n]);
        }

        let mut distances = vec![0.0_f64; n];
        let mut order: Vec<usize> = (0..n).collect();

        for objective in 0..m {
            let value = |i: usize| solutions[i].objectives()[objective];
            order.sort_by(|&a, &b| value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal));

            let min = value(order[0]);
            let max = value(order[n - 1]);
            let range = max - min;
            if range <= 0.0 {
                continue;
            }

            for &i in &order {
                let v = value(i);
                if v == min || v == max {
                    distances[i] = f64::INFINITY;
                }
            }

            for k in 1..n - 1 {
                let i = order[k];
                if distances[i].is_finite() {
                    distances[i] += (value(order[k + 1]) - value(order[k - 1])) / range;
                }
            }
        }

        Ok(distances)
    }
}

impl<V: Variable> DensityEstimator<V> for CrowdingDistance {
    fn compute(&self, solutions: &mut [Solution<V>]) -> Result<()> {
        let distances = self.distances(solutions)?;
        for (solution, distance) in solutions.iter_mut().zip(distances) {
            solution.set_attribute(AttributeKey::CrowdingDistance, AttributeValue::Float(distance));
        }
        Ok(())
    }

    fn attribute_key(&self) -> AttributeKey {
        AttributeKey::CrowdingDistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    fn front(points: &[[f64; 2]]) -> Vec<Solution<f64>> {
        points
            .iter()
            .map(|p| Solution::from_objectives(p.to_vec()))
            .collect()
    }

    #[test]
    fn test_empty_set_is_noop() {
        let mut empty: Vec<Solution<f64>> = Vec::new();
        CrowdingDistance::new().compute(&mut empty).unwrap();
    }

    #[test]
    fn test_small_sets_are_infinite() {
        let mut one = front(&[[1.0, 1.0]]);
        CrowdingDistance::new().compute(&mut one).unwrap();
        assert_eq!(one[0].crowding_distance(), Some(f64::INFINITY));

        // identical points: every range is zero, still infinite
        let mut two = front(&[[1.0, 1.0], [1.0, 1.0]]);
        CrowdingDistance::new().compute(&mut two).unwrap();
        assert!(two.iter().all(|s| s.crowding_distance() == Some(f64::INFINITY)));
    }

    #[test]
    fn test_four_point_front() {
        let mut solutions = front(&[[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]]);
        CrowdingDistance::new().compute(&mut solutions).unwrap();

        assert_eq!(solutions[0].crowding_distance(), Some(f64::INFINITY));
        assert_eq!(solutions[3].crowding_distance(), Some(f64::INFINITY));

        // each interior point sees a gap of 2/3 in both objectives
        for s in &solutions[1..3] {
            let d = s.crowding_distance().unwrap();
            assert!((d - 4.0 / 3.0).abs() < 1e-12, "unexpected distance {}", d);
        }
    }

    #[test]
    fn test_zero_range_dimension_is_skipped() {
        let mut solutions = front(&[[1.0, 5.0], [2.0, 5.0], [4.0, 5.0]]);
        CrowdingDistance::new().compute(&mut solutions).unwrap();

        assert!(solutions[0].crowding_distance().unwrap().is_infinite());
        assert!(solutions[2].crowding_distance().unwrap().is_infinite());
        let interior = solutions[1].crowding_distance().unwrap();
        assert!((interior - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_denser_point_has_lower_distance() {
        let mut solutions = front(&[[0.0, 10.0], [1.0, 9.0], [1.2, 8.8], [10.0, 0.0]]);
        CrowdingDistance::new().compute(&mut solutions).unwrap();

        let a = solutions[1].crowding_distance().unwrap();
        let b = solutions[2].crowding_distance().unwrap();
        assert!(a < 1.0 && b.is_finite());
        assert!(b > a);
    }

    #[test]
    fn test_mismatched_objectives_fail() {
        let mut solutions = vec![
            Solution::<f64>::from_objectives(vec![1.0, 2.0]),
            Solution::<f64>::from_objectives(vec![1.0, 2.0, 3.0]),
            Solution::<f64>::from_objectives(vec![1.0, 2.0]),
        ];
        assert!(matches!(
            CrowdingDistance::new().compute(&mut solutions),
            Err(GeneticError::MismatchedObjectives { .. })
        ));
    }
}
