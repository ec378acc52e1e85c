//! # Hypervolume
//!
//! The hypervolume of a front is the volume of objective space dominated by the front
//! and bounded by a reference point. Larger is better. The computation itself is a
//! strategy behind the `HypervolumeAlgorithm` trait:
//!
//! - [`SlicingHypervolume`]: hypervolume by slicing objectives, any number of objectives.
//! - [`SweepHypervolume2d`]: sort-and-sweep, two objectives only, `O(n log n)`.
//!
//! ## Example
//!
//! ```rust
//! use pareto_ga::indicator::{Front, Hypervolume, QualityIndicator};
//!
//! let front = Front::new(vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]]).unwrap();
//! let hv = Hypervolume::from_reference_point(vec![4.0, 4.0]).unwrap();
//!
//! assert_eq!(hv.compute(&front).unwrap(), 6.0);
//! assert!(!hv.is_the_lower_the_better());
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;
use std::path::Path;

use super::{Front, QualityIndicator};
use crate::error::{GeneticError, Result};

/// Computes the hypervolume of minimization points against a reference point.
///
/// Callers pass only points strictly better than the reference point in every
/// objective. A point whose dimension differs from the reference point's is rejected
/// with `MismatchedObjectives`.
pub trait HypervolumeAlgorithm: Debug + Send + Sync {
    fn volume(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64>;

    /// Exclusive contribution of every point: the volume lost if it were removed.
    fn contributions(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<Vec<f64>> {
        let total = self.volume(points, reference_point)?;
        let mut others: Vec<Vec<f64>> = Vec::with_capacity(points.len().saturating_sub(1));
        (0..points.len())
            .map(|i| {
                others.clear();
                others.extend(
                    points
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != i)
                        .map(|(_, p)| p.clone()),
                );
                Ok((total - self.volume(&others, reference_point)?).max(0.0))
            })
            .collect()
    }
}

/// Hypervolume by slicing objectives.
///
/// Points are sorted on the last objective; every slab between two consecutive values is
/// the (d-1)-dimensional hypervolume of the points seen so far, times the slab depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlicingHypervolume;

impl SlicingHypervolume {
    fn slice(points: &[Vec<f64>], reference_point: &[f64]) -> f64 {
        let d = reference_point.len();
        if points.is_empty() || d == 0 {
            return 0.0;
        }
        if d == 1 {
            let best = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
            return (reference_point[0] - best).max(0.0);
        }

        let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
        sorted.sort_by(|a, b| a[d - 1].partial_cmp(&b[d - 1]).unwrap_or(Ordering::Equal));

        let sub_reference = &reference_point[..d - 1];
        let mut projected: Vec<Vec<f64>> = Vec::new();
        let mut volume = 0.0;

        for (i, point) in sorted.iter().enumerate() {
            insert_non_dominated(&mut projected, &point[..d - 1]);

            let upper = sorted
                .get(i + 1)
                .map_or(reference_point[d - 1], |next| next[d - 1]);
            let depth = upper - point[d - 1];
            if depth > 0.0 {
                volume += depth * Self::slice(&projected, sub_reference);
            }
        }

        volume
    }
}

fn check_dimensions(points: &[Vec<f64>], reference_point: &[f64]) -> Result<()> {
    match points.iter().find(|p| p.len() != reference_point.len()) {
        Some(point) => Err(GeneticError::MismatchedObjectives {
            expected: reference_point.len(),
            found: point.len(),
        }),
        None => Ok(()),
    }
}

/// Adds `candidate` to a set of mutually non-dominated points, dropping the points it
/// weakly dominates. Weakly dominated candidates are not added.
fn insert_non_dominated(set: &mut Vec<Vec<f64>>, candidate: &[f64]) {
    let weakly_dominates = |a: &[f64], b: &[f64]| a.iter().zip(b).all(|(x, y)| x <= y);

    if set.iter().any(|p| weakly_dominates(p, candidate)) {
        return;
    }
    set.retain(|p| !weakly_dominates(candidate, p));
    set.push(candidate.to_vec());
}

impl HypervolumeAlgorithm for SlicingHypervolume {
    fn volume(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64> {
        check_dimensions(points, reference_point)?;
        Ok(Self::slice(points, reference_point))
    }
}

/// Two-objective sort-and-sweep hypervolume.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepHypervolume2d;

impl HypervolumeAlgorithm for SweepHypervolume2d {
    fn volume(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64> {
        if reference_point.len() != 2 {
            return Err(GeneticError::MismatchedObjectives {
                expected: 2,
                found: reference_point.len(),
            });
        }
        check_dimensions(points, reference_point)?;

        let mut sorted: Vec<&Vec<f64>> = points.iter().collect();
        sorted.sort_by(|a, b| {
            a[0].partial_cmp(&b[0])
                .unwrap_or(Ordering::Equal)
                .then(a[1].partial_cmp(&b[1]).unwrap_or(Ordering::Equal))
        });

        let mut volume = 0.0;
        let mut ceiling = reference_point[1];
        for point in sorted {
            if point[1] < ceiling {
                volume += (reference_point[0] - point[0]) * (ceiling - point[1]);
                ceiling = point[1];
            }
        }
        Ok(volume)
    }
}

/// The hypervolume quality indicator.
#[derive(Debug, Clone)]
pub struct Hypervolume<A: HypervolumeAlgorithm = SlicingHypervolume> {
    reference_point: Vec<f64>,
    algorithm: A,
}

impl Hypervolume<SlicingHypervolume> {
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty or non-finite reference point.
    pub fn from_reference_point(reference_point: Vec<f64>) -> Result<Self> {
        if reference_point.is_empty() || reference_point.iter().any(|v| !v.is_finite()) {
            return Err(GeneticError::InvalidArgument(format!(
                "invalid reference point {:?}",
                reference_point
            )));
        }
        Ok(Self {
            reference_point,
            algorithm: SlicingHypervolume,
        })
    }

    /// The same reference value on every axis.
    pub fn from_uniform_reference(value: f64, dimensions: usize) -> Result<Self> {
        Self::from_reference_point(vec![value; dimensions])
    }

    /// Reference point at the per-objective maximum of `front`.
    pub fn from_reference_front(front: &Front) -> Result<Self> {
        Self::from_reference_front_with_offset(front, 0.0)
    }

    /// Reference point at the per-objective maximum of `front` plus `offset`.
    pub fn from_reference_front_with_offset(front: &Front, offset: f64) -> Result<Self> {
        if front.is_empty() {
            return Err(GeneticError::InvalidArgument(
                "reference front must not be empty".to_string(),
            ));
        }
        Self::from_reference_point(front.maximum().into_iter().map(|v| v + offset).collect())
    }

    /// Reads the reference front from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reference_front(&Front::from_file(path)?)
    }
}

impl<A: HypervolumeAlgorithm> Hypervolume<A> {
    /// Swaps the computation strategy.
    pub fn with_algorithm<B: HypervolumeAlgorithm>(self, algorithm: B) -> Hypervolume<B> {
        Hypervolume {
            reference_point: self.reference_point,
            algorithm,
        }
    }

    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Hypervolume dominated by `front`.
    pub fn compute(&self, front: &Front) -> Result<f64> {
        let (points, _) = self.relevant_points(front)?;
        self.algorithm.volume(&points, &self.reference_point)
    }

    /// Exclusive contribution of every point of `front`, in front order.
    ///
    /// Points that are not better than the reference point in every objective contribute
    /// zero.
    pub fn compute_hypervolume_contribution(&self, front: &Front) -> Result<Vec<f64>> {
        let (points, indices) = self.relevant_points(front)?;
        let contributions = self.algorithm.contributions(&points, &self.reference_point)?;

        let mut result = vec![0.0; front.len()];
        for (index, contribution) in indices.into_iter().zip(contributions) {
            result[index] = contribution;
        }
        Ok(result)
    }

    /// Points strictly better than the reference point, with their front indices.
    fn relevant_points(&self, front: &Front) -> Result<(Vec<Vec<f64>>, Vec<usize>)> {
        if !front.is_empty() && front.dimensions() != self.reference_point.len() {
            return Err(GeneticError::MismatchedObjectives {
                expected: self.reference_point.len(),
                found: front.dimensions(),
            });
        }

        Ok(front
            .points()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.iter().zip(&self.reference_point).all(|(v, r)| v < r))
            .map(|(i, p)| (p.clone(), i))
            .unzip())
    }
}

impl<A: HypervolumeAlgorithm> QualityIndicator for Hypervolume<A> {
    fn name(&self) -> &str {
        "HV"
    }

    fn is_the_lower_the_better(&self) -> bool {
        false
    }

    fn evaluate(&self, front: &Front) -> Result<f64> {
        self.compute(front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front(points: &[&[f64]]) -> Front {
        Front::new(points.iter().map(|p| p.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_single_point_is_box() {
        let hv = Hypervolume::from_reference_point(vec![3.0, 5.0, 2.0]).unwrap();
        let value = hv.compute(&front(&[&[1.0, 1.0, 1.0]])).unwrap();
        assert!((value - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_front_is_zero() {
        let hv = Hypervolume::from_reference_point(vec![1.0, 1.0]).unwrap();
        assert_eq!(hv.compute(&Front::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_points_outside_reference_are_ignored() {
        let hv = Hypervolume::from_reference_point(vec![2.0, 2.0]).unwrap();
        let value = hv.compute(&front(&[&[1.0, 1.0], &[3.0, 0.0]])).unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dominated_points_add_nothing() {
        let hv = Hypervolume::from_reference_point(vec![4.0, 4.0]).unwrap();
        let with = hv.compute(&front(&[&[1.0, 1.0], &[2.0, 2.0]])).unwrap();
        let without = hv.compute(&front(&[&[1.0, 1.0]])).unwrap();
        assert!((with - without).abs() < 1e-12);
    }

    #[test]
    fn test_strategies_agree_in_two_dimensions() {
        let f = front(&[&[0.1, 0.9], &[0.3, 0.4], &[0.35, 0.5], &[0.6, 0.2], &[0.95, 0.05]]);
        let slicing = Hypervolume::from_reference_point(vec![1.0, 1.0]).unwrap();
        let sweep = slicing.clone().with_algorithm(SweepHypervolume2d);

        let a = slicing.compute(&f).unwrap();
        let b = sweep.compute(&f).unwrap();
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn test_three_dimensional_union() {
        // two unit-offset boxes overlapping in a 1x1x1 cube
        let hv = Hypervolume::from_reference_point(vec![2.0, 2.0, 2.0]).unwrap();
        let value = hv
            .compute(&front(&[&[0.0, 1.0, 1.0], &[1.0, 0.0, 1.0]]))
            .unwrap();
        // 2*1*1 + 1*2*1 - 1*1*1
        assert!((value - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_contributions() {
        let hv = Hypervolume::from_reference_point(vec![4.0, 4.0]).unwrap();
        let f = front(&[&[1.0, 3.0], &[2.0, 2.0], &[3.0, 1.0], &[5.0, 0.0]]);
        let contributions = hv.compute_hypervolume_contribution(&f).unwrap();

        assert_eq!(contributions.len(), 4);
        for c in &contributions[..3] {
            assert!((c - 1.0).abs() < 1e-12);
        }
        assert_eq!(contributions[3], 0.0);
    }

    #[test]
    fn test_reference_from_front() {
        let reference = front(&[&[0.0, 2.0], &[1.0, 1.0], &[3.0, 0.0]]);
        let hv = Hypervolume::from_reference_front_with_offset(&reference, 1.0).unwrap();
        assert_eq!(hv.reference_point(), &[4.0, 3.0]);

        let hv = Hypervolume::from_uniform_reference(1.5, 3).unwrap();
        assert_eq!(hv.reference_point(), &[1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let hv = Hypervolume::from_reference_point(vec![1.0, 1.0]).unwrap();
        assert!(matches!(
            hv.compute(&front(&[&[0.5, 0.5, 0.5]])),
            Err(GeneticError::MismatchedObjectives { .. })
        ));
        assert!(Hypervolume::from_reference_point(vec![]).is_err());
    }

    #[test]
    fn test_short_points_are_rejected_by_both_strategies() {
        let points = vec![vec![0.5, 0.5], vec![0.25]];
        let reference = [1.0, 1.0];

        assert!(matches!(
            SweepHypervolume2d.volume(&points, &reference),
            Err(GeneticError::MismatchedObjectives {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            SlicingHypervolume.volume(&points, &reference),
            Err(GeneticError::MismatchedObjectives {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            SweepHypervolume2d.contributions(&points, &reference),
            Err(GeneticError::MismatchedObjectives { .. })
        ));
    }
}
