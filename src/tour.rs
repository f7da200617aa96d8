//! # Tour
//!
//! A [`Tour`] is a closed cycle visiting every point of a [`PointSet`]
//! exactly once. It stores the visiting order as point indices and its total
//! length, computed once on construction. Tours are never edited in place;
//! the genetic operators produce new orders and new tours are built from them.

use std::fmt;
use std::sync::Arc;

use crate::error::{GeneticError, Result};
use crate::point::{Point, PointSet};
use crate::rng::RandomNumberGenerator;

/// A closed tour over a shared point set.
#[derive(Debug, Clone)]
pub struct Tour {
    points: Arc<PointSet>,
    order: Vec<usize>,
    distance: f64,
}

impl Tour {
    /// Builds a tour visiting `points` in `order`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidPermutation`] if `order` is not a
    /// permutation of `0..points.len()`.
    pub fn new(points: Arc<PointSet>, order: Vec<usize>) -> Result<Self> {
        if let Some(problem) = permutation_problem(&order, points.len()) {
            return Err(GeneticError::InvalidPermutation(problem));
        }
        Ok(Self::build(points, order))
    }

    /// Builds a tour with a uniformly random visiting order.
    pub fn random(points: Arc<PointSet>, rng: &mut RandomNumberGenerator) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        rng.shuffle(&mut order);
        Self::build(points, order)
    }

    /// Builds a tour from an order produced by a genetic operator.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation: operators must never produce one.
    pub(crate) fn from_offspring(points: Arc<PointSet>, order: Vec<usize>) -> Self {
        if let Some(problem) = permutation_problem(&order, points.len()) {
            panic!("genetic operator produced an invalid tour: {}", problem);
        }
        Self::build(points, order)
    }

    fn build(points: Arc<PointSet>, order: Vec<usize>) -> Self {
        let distance = cycle_length(&points, &order);
        Self {
            points,
            order,
            distance,
        }
    }

    /// Total length of the closed cycle, including the leg back to the start.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Reciprocal of the distance; higher is better.
    pub fn fitness(&self) -> f64 {
        1.0 / self.distance
    }

    /// The visiting order as indices into [`Tour::point_set`].
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The visited points, in order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.order.iter().map(move |&i| &self.points.points()[i])
    }

    pub fn point_set(&self) -> &Arc<PointSet> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: tours visit at least two points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour(points={}, distance={:.2})", self.len(), self.distance)
    }
}

fn cycle_length(points: &PointSet, order: &[usize]) -> f64 {
    let n = order.len();
    (0..n)
        .map(|i| points.distance(order[i], order[(i + 1) % n]))
        .sum()
}

/// Describes why `order` is not a permutation of `0..len`, if it is not.
pub(crate) fn permutation_problem(order: &[usize], len: usize) -> Option<String> {
    if order.len() != len {
        return Some(format!("expected {} positions, got {}", len, order.len()));
    }
    let mut seen = vec![false; len];
    for (position, &index) in order.iter().enumerate() {
        if index >= len {
            return Some(format!("index {} at position {} is out of range", index, position));
        }
        if seen[index] {
            return Some(format!("index {} repeated at position {}", index, position));
        }
        seen[index] = true;
    }
    None
}
