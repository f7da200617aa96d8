use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

/// Trait for parent selection strategies.
///
/// A strategy picks one tour out of a population, favouring shorter tours.
/// Strategies only read the population; the engine calls `select` twice per
/// offspring pair.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use evotsp::point::{Point, PointSet};
/// use evotsp::population::Population;
/// use evotsp::rng::RandomNumberGenerator;
/// use evotsp::selection::{SelectionStrategy, TournamentSelection};
/// use evotsp::error::Result;
///
/// fn main() -> Result<()> {
///     let points = Arc::new(PointSet::new(vec![
///         Point::planar("a", 0.0, 0.0),
///         Point::planar("b", 0.0, 1.0),
///         Point::planar("c", 1.0, 1.0),
///     ])?);
///     let mut rng = RandomNumberGenerator::from_seed(3);
///     let population = Population::random(points, 10, &mut rng)?;
///
///     let selection = TournamentSelection::new(3)?;
///     let parent = selection.select(&population, &mut rng)?;
///
///     assert_eq!(parent.len(), 3);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The strategy's parameters do not fit the population (e.g. a
    ///   tournament larger than the population)
    /// - The population's fitness values are degenerate
    fn select<'a>(
        &self,
        population: &'a [Tour],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Tour>;
}
