use tracing::debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::tour::Tour;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// each tour with probability proportional to its fitness, `1 / distance`. A draw
/// `r` in `[0, total)` is matched against the cumulative fitness in population
/// order, and the first tour whose cumulative sum exceeds `r` wins.
///
/// A tour of zero length has infinite fitness and makes the wheel meaningless,
/// so such populations are rejected rather than masked.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use evotsp::point::{Point, PointSet};
/// use evotsp::population::Population;
/// use evotsp::rng::RandomNumberGenerator;
/// use evotsp::selection::{RouletteWheelSelection, SelectionStrategy};
/// use evotsp::error::Result;
///
/// fn main() -> Result<()> {
///     let points = Arc::new(PointSet::new(vec![
///         Point::planar("a", 0.0, 0.0),
///         Point::planar("b", 3.0, 0.0),
///         Point::planar("c", 3.0, 4.0),
///         Point::planar("d", 0.0, 4.0),
///     ])?);
///     let mut rng = RandomNumberGenerator::from_seed(1);
///     let population = Population::random(points, 8, &mut rng)?;
///
///     let parent = RouletteWheelSelection::new().select(&population, &mut rng)?;
///     assert_eq!(parent.len(), 4);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Computes each tour's fitness and the wheel's total.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::DegenerateFitness`] if any tour has zero length
    /// or the total is not a finite positive number.
    fn fitness_values(&self, population: &[Tour]) -> Result<(Vec<f64>, f64)> {
        let mut fitness = Vec::with_capacity(population.len());
        for (i, tour) in population.iter().enumerate() {
            if tour.distance() <= 0.0 {
                return Err(GeneticError::DegenerateFitness(format!(
                    "tour at rank {} has zero length",
                    i
                )));
            }
            fitness.push(tour.fitness());
        }

        let total: f64 = fitness.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(GeneticError::DegenerateFitness(format!(
                "total fitness is {}",
                total
            )));
        }

        Ok((fitness, total))
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select<'a>(
        &self,
        population: &'a [Tour],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Tour> {
        let last = population.last().ok_or(GeneticError::EmptyPopulation)?;
        let (fitness, total) = self.fitness_values(population)?;

        let target = rng.uniform(total);
        let mut cumulative = 0.0;
        for (tour, value) in population.iter().zip(&fitness) {
            cumulative += value;
            if cumulative > target {
                return Ok(tour);
            }
        }

        debug!(target, cumulative, "roulette scan exhausted, returning last tour");
        Ok(last)
    }
}
