//! # Dominance Ranking
//!
//! Partitions a list of solutions into ordered non-dominated sub-fronts with the fast
//! non-dominated sort of Deb et al. (2002): sub-front 0 holds the solutions no other
//! solution dominates, sub-front 1 those dominated only by sub-front 0, and so on.
//!
//! ## Example
//!
//! ```rust
//! use pareto_ga::ranking::DominanceRanking;
//! use pareto_ga::solution::Solution;
//!
//! let solutions: Vec<Solution<f64>> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
//!     .iter()
//!     .map(|o| Solution::from_objectives(o.to_vec()))
//!     .collect();
//!
//! let ranking = DominanceRanking::new().compute(solutions).unwrap();
//!
//! assert_eq!(ranking.number_of_subfronts(), 2);
//! assert_eq!(ranking.subfront(0).unwrap().len(), 3);
//! assert_eq!(ranking.subfront(1).unwrap()[0].objectives(), &[4.0, 4.0]);
//! ```

use std::cmp::Ordering;

use crate::comparator::{DominanceComparator, SolutionComparator};
use crate::error::Result;
use crate::solution::{AttributeKey, AttributeValue, Solution, Variable};

/// Solutions partitioned into non-dominated sub-fronts.
#[derive(Debug, Clone)]
pub struct Ranking<V> {
    subfronts: Vec<Vec<Solution<V>>>,
}

impl<V> Ranking<V> {
    pub fn number_of_subfronts(&self) -> usize {
        self.subfronts.len()
    }

    pub fn subfront(&self, rank: usize) -> Option<&[Solution<V>]> {
        self.subfronts.get(rank).map(Vec::as_slice)
    }

    pub fn subfronts(&self) -> &[Vec<Solution<V>>] {
        &self.subfronts
    }

    pub fn into_subfronts(self) -> Vec<Vec<Solution<V>>> {
        self.subfronts
    }
}

/// The fast non-dominated sort.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct DominanceRanking {
    comparator: DominanceComparator,
}

impl DominanceRanking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sub-fronts as indices into `solutions`, in input order within each sub-front.
    ///
    /// # Errors
    ///
    /// Propagates comparator failures (mismatched objective counts, NaN objectives).
    pub fn rank_indices<V: Variable>(&self, solutions: &[Solution<V>]) -> Result<Vec<Vec<usize>>> {
        let n = solutions.len();
        let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut domination_count = vec![0usize; n];

        for i in 0..n {
            for j in (i + 1)..n {
                match self.comparator.compare(&solutions[i], &solutions[j])? {
                    Ordering::Less => {
                        dominated[i].push(j);
                        domination_count[j] += 1;
                    }
                    Ordering::Greater => {
                        dominated[j].push(i);
                        domination_count[i] += 1;
                    }
                    Ordering::Equal => {}
                }
            }
        }

        let mut fronts = Vec::new();
        let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

        while !current.is_empty() {
            let mut next = Vec::new();
            for &i in &current {
                for &j in &dominated[i] {
                    domination_count[j] -= 1;
                    if domination_count[j] == 0 {
                        next.push(j);
                    }
                }
            }
            next.sort_unstable();
            fronts.push(current);
            current = next;
        }

        Ok(fronts)
    }

    /// Ranks `solutions`, tagging each with its sub-front index as `AttributeKey::Rank`.
    ///
    /// An empty input yields zero sub-fronts.
    pub fn compute<V: Variable>(&self, solutions: Vec<Solution<V>>) -> Result<Ranking<V>> {
        let fronts = self.rank_indices(&solutions)?;

        let mut slots: Vec<Option<Solution<V>>> = solutions.into_iter().map(Some).collect();
        let subfronts = fronts
            .into_iter()
            .enumerate()
            .map(|(rank, indices)| {
                indices
                    .into_iter()
                    .filter_map(|i| slots[i].take())
                    .map(|mut solution| {
                        solution.set_attribute(AttributeKey::Rank, AttributeValue::Integer(rank as i64));
                        solution
                    })
                    .collect()
            })
            .collect();

        Ok(Ranking { subfronts })
    }
}
