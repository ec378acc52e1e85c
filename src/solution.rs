//! # Solution
//!
//! A `Solution` is one candidate of the population: its decision variables, the objective
//! values computed by the problem, the constraint values and a bag of attributes attached
//! by the engine (crowding distance, rank, generation number, ...).
//!
//! The number of variables, objectives and constraints is fixed when the solution is
//! created. Mutable access is only handed out as slices, so operators can change values
//! but never the shape. Objective values are meaningless until the solution has been
//! evaluated.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pareto_ga::solution::{Bounds, Solution};
//!
//! let bounds: Arc<[Bounds<f64>]> = vec![Bounds::new(0.0, 1.0).unwrap(); 2].into();
//! let mut solution = Solution::new(vec![0.2, 0.7], bounds, 2, 0).unwrap();
//! solution.set_objectives(&[1.0, 3.5]).unwrap();
//!
//! assert_eq!(solution.objectives(), &[1.0, 3.5]);
//! assert!(solution.is_feasible());
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A decision variable type.
///
/// Operators work on variables through their `f64` projection, so real and integer
/// encodings share the same crossover and mutation code. Integer types round on the way
/// back.
pub trait Variable: Clone + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    fn to_f64(&self) -> f64;

    fn from_f64(value: f64) -> Self;

    /// Draws a value uniformly within `bounds` (inclusive upper bound for integers).
    fn sample(bounds: &Bounds<Self>, rng: &mut RandomNumberGenerator) -> Result<Self>;
}

impl Variable for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn sample(bounds: &Bounds<Self>, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let (lower, upper) = (bounds.lower, bounds.upper);
        Ok(lower + rng.next_double() * (upper - lower))
    }
}

macro_rules! impl_integer_variable {
    ($($t:ty),*) => {
        $(
            impl Variable for $t {
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value.round() as $t
                }

                fn sample(bounds: &Bounds<Self>, rng: &mut RandomNumberGenerator) -> Result<Self> {
                    let upper = (bounds.upper as i64).checked_add(1).ok_or_else(|| {
                        GeneticError::InvalidArgument(format!(
                            "upper bound {} leaves no room for an exclusive range",
                            bounds.upper
                        ))
                    })?;
                    let value = rng.next_int_range(bounds.lower as i64, upper)?;
                    Ok(value as $t)
                }
            }
        )*
    };
}

impl_integer_variable!(i32, i64);

/// Inclusive lower and upper bound of a decision variable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<V> {
    lower: V,
    upper: V,
}

impl<V: Variable> Bounds<V> {
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `lower <= upper`.
    pub fn new(lower: V, upper: V) -> Result<Self> {
        if !(lower <= upper) {
            return Err(GeneticError::InvalidArgument(format!(
                "lower bound {:?} is greater than upper bound {:?}",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &V {
        &self.lower
    }

    pub fn upper(&self) -> &V {
        &self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper.to_f64() - self.lower.to_f64()
    }

    /// Clamps a value into `[lower, upper]`.
    pub fn clamp(&self, value: V) -> V {
        if value < self.lower {
            self.lower.clone()
        } else if value > self.upper {
            self.upper.clone()
        } else {
            value
        }
    }

    /// Converts an `f64` into the variable type and clamps it into the bounds.
    pub fn clamp_f64(&self, value: f64) -> V {
        let lower = self.lower.to_f64();
        let upper = self.upper.to_f64();
        self.clamp(V::from_f64(value.max(lower).min(upper)))
    }
}

/// Keys of the attributes the engine attaches to solutions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    CrowdingDistance,
    Rank,
    Generation,
    HypervolumeContribution,
    Custom(String),
}

/// A value stored in the attribute bag of a solution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Float(f64),
    Integer(i64),
    Text(String),
}

impl AttributeValue {
    /// Numeric view of the value; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            AttributeValue::Integer(v) => Some(*v as f64),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

/// A candidate solution. See the module documentation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    variables: Vec<V>,
    bounds: Arc<[Bounds<V>]>,
    objectives: Vec<f64>,
    constraints: Vec<f64>,
    attributes: HashMap<AttributeKey, AttributeValue>,
}

impl<V: Variable> Solution<V> {
    /// Creates a solution with zeroed objectives and constraints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the number of variables differs from the number of
    /// bounds.
    pub fn new(
        variables: Vec<V>,
        bounds: Arc<[Bounds<V>]>,
        number_of_objectives: usize,
        number_of_constraints: usize,
    ) -> Result<Self> {
        if variables.len() != bounds.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "{} variables but {} bounds",
                variables.len(),
                bounds.len()
            )));
        }

        Ok(Self {
            variables,
            bounds,
            objectives: vec![0.0; number_of_objectives],
            constraints: vec![0.0; number_of_constraints],
            attributes: HashMap::new(),
        })
    }

    /// Creates a solution without decision variables holding the given objective values.
    ///
    /// Useful to represent points of a front in objective space.
    pub fn from_objectives(objectives: Vec<f64>) -> Self {
        Self {
            variables: Vec::new(),
            bounds: Arc::from(Vec::new()),
            objectives,
            constraints: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut [V] {
        &mut self.variables
    }

    pub fn variable(&self, index: usize) -> Option<&V> {
        self.variables.get(index)
    }

    pub fn bounds(&self) -> &[Bounds<V>] {
        &self.bounds
    }

    /// Shared handle to the bounds, for creating sibling solutions.
    pub fn shared_bounds(&self) -> Arc<[Bounds<V>]> {
        Arc::clone(&self.bounds)
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn objectives_mut(&mut self) -> &mut [f64] {
        &mut self.objectives
    }

    pub fn objective(&self, index: usize) -> Option<f64> {
        self.objectives.get(index).copied()
    }

    /// Overwrites all objective values at once.
    ///
    /// # Errors
    ///
    /// Returns `MismatchedObjectives` if `values` does not have one value per objective.
    pub fn set_objectives(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.objectives.len() {
            return Err(GeneticError::MismatchedObjectives {
                expected: self.objectives.len(),
                found: values.len(),
            });
        }
        self.objectives.copy_from_slice(values);
        Ok(())
    }

    pub fn constraints(&self) -> &[f64] {
        &self.constraints
    }

    pub fn constraints_mut(&mut self) -> &mut [f64] {
        &mut self.constraints
    }

    /// Sum of the violated (negative) constraint values. Zero for feasible solutions.
    pub fn overall_constraint_violation(&self) -> f64 {
        self.constraints.iter().filter(|c| **c < 0.0).sum()
    }

    pub fn number_of_violated_constraints(&self) -> usize {
        self.constraints.iter().filter(|c| **c < 0.0).count()
    }

    pub fn is_feasible(&self) -> bool {
        self.number_of_violated_constraints() == 0
    }

    pub fn attribute(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: AttributeKey, value: AttributeValue) {
        self.attributes.insert(key, value);
    }

    pub fn remove_attribute(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.attributes.remove(key)
    }

    pub fn attributes(&self) -> &HashMap<AttributeKey, AttributeValue> {
        &self.attributes
    }

    /// Drops every attribute, e.g. the stale rank and density of a freshly bred child.
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// The crowding distance attached by the last density estimation, if any.
    pub fn crowding_distance(&self) -> Option<f64> {
        self.attribute(&AttributeKey::CrowdingDistance)
            .and_then(AttributeValue::as_f64)
    }

    /// The index of the sub-front this solution was placed in by the last ranking.
    pub fn rank(&self) -> Option<usize> {
        self.attribute(&AttributeKey::Rank)
            .and_then(AttributeValue::as_i64)
            .map(|r| r as usize)
    }
}
