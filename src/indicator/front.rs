//! # Front
//!
//! A `Front` is an immutable set of points in objective space, the input of quality
//! indicators. Fronts can be built from points, from solutions, or read from text where
//! every non-empty line holds the whitespace-separated objective values of one point.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{to_genetic_error, GeneticError, Result, ResultExt};
use crate::solution::{Solution, Variable};

/// An immutable matrix of objective-space points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Front {
    points: Vec<Vec<f64>>,
}

impl Front {
    /// # Errors
    ///
    /// Returns `MismatchedObjectives` if the points do not all have the same dimension,
    /// and `InvalidNumericValue` if a coordinate is NaN.
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self> {
        let dimensions = points.first().map_or(0, Vec::len);
        for point in &points {
            if point.len() != dimensions {
                return Err(GeneticError::MismatchedObjectives {
                    expected: dimensions,
                    found: point.len(),
                });
            }
            if point.iter().any(|v| v.is_nan()) {
                return Err(GeneticError::InvalidNumericValue(
                    "NaN coordinate in front".to_string(),
                ));
            }
        }
        Ok(Self { points })
    }

    /// The objective vectors of `solutions`.
    pub fn from_solutions<V: Variable>(solutions: &[Solution<V>]) -> Result<Self> {
        Self::new(solutions.iter().map(|s| s.objectives().to_vec()).collect())
    }

    /// Reads a front from a text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .context(format!("Failed to read front file {}", path.display()))?;
        text.parse()
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&[f64]> {
        self.points.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of objectives of every point; zero for an empty front.
    pub fn dimensions(&self) -> usize {
        self.points.first().map_or(0, Vec::len)
    }

    /// Per-objective maximum (the nadir point of a front of minimization objectives).
    pub fn maximum(&self) -> Vec<f64> {
        let mut maximum = vec![f64::NEG_INFINITY; self.dimensions()];
        for point in &self.points {
            for (m, v) in maximum.iter_mut().zip(point) {
                *m = m.max(*v);
            }
        }
        maximum
    }
}

impl FromStr for Front {
    type Err = GeneticError;

    fn from_str(text: &str) -> Result<Self> {
        let points = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                line.split_whitespace()
                    .map(|token| {
                        token
                            .parse::<f64>()
                            .map_err(|e| to_genetic_error(e, &format!("line {}", number + 1)))
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front() {
        let front: Front = "1.0 4.0\n\n2.5   3.0\n4 1\n".parse().unwrap();
        assert_eq!(front.len(), 3);
        assert_eq!(front.dimensions(), 2);
        assert_eq!(front.point(1), Some(&[2.5, 3.0][..]));
        assert_eq!(front.maximum(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result: Result<Front> = "1.0 2.0\n1.0 x\n".parse();
        match result {
            Err(GeneticError::Parse(msg)) => assert!(msg.contains("line 2")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_front_rejected() {
        assert!(matches!(
            Front::new(vec![vec![1.0, 2.0], vec![1.0]]),
            Err(GeneticError::MismatchedObjectives {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Front::from_file("/nonexistent/reference.pf");
        assert!(matches!(result, Err(GeneticError::Other(_))));
    }

    #[test]
    fn test_from_solutions() {
        let solutions = vec![
            Solution::<f64>::from_objectives(vec![1.0, 2.0]),
            Solution::<f64>::from_objectives(vec![3.0, 0.5]),
        ];
        let front = Front::from_solutions(&solutions).unwrap();
        assert_eq!(front.points(), &[vec![1.0, 2.0], vec![3.0, 0.5]]);
    }
}
