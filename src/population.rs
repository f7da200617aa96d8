//! # Population
//!
//! A fixed-size set of tours over one point set, kept stably sorted by
//! distance so that index 0 is always the best tour and equal-length tours
//! keep their relative order.

use std::ops::Deref;
use std::sync::Arc;

use crate::error::{GeneticError, OptionExt, Result};
use crate::point::PointSet;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Creates `size` independent, uniformly random tours.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if `size` is zero.
    pub fn random(points: Arc<PointSet>, size: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let tours = (0..size)
            .map(|_| Tour::random(points.clone(), rng))
            .collect();
        Self::from_tours(tours)
    }

    /// Wraps `tours`, stably sorting them by ascending distance.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if `tours` is empty, or
    /// [`GeneticError::Configuration`] if the tours do not share one point set.
    pub fn from_tours(mut tours: Vec<Tour>) -> Result<Self> {
        let first = tours.first().ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let shared = first.point_set().clone();
        if tours.iter().any(|t| !Arc::ptr_eq(t.point_set(), &shared)) {
            return Err(GeneticError::Configuration(
                "all tours of a population must share one point set".to_string(),
            ));
        }

        tours.sort_by(|a, b| a.distance().total_cmp(&b.distance()));
        Ok(Self { tours })
    }

    /// The shortest tour.
    pub fn best(&self) -> &Tour {
        &self.tours[0]
    }

    /// The longest tour.
    pub fn worst(&self) -> &Tour {
        &self.tours[self.tours.len() - 1]
    }

    pub fn mean_distance(&self) -> f64 {
        self.tours.iter().map(Tour::distance).sum::<f64>() / self.tours.len() as f64
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn into_tours(self) -> Vec<Tour> {
        self.tours
    }
}

impl Deref for Population {
    type Target = [Tour];

    fn deref(&self) -> &Self::Target {
        &self.tours
    }
}
