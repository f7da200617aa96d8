use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use super::{
    history::EvolutionHistory,
    options::{CrossoverMethod, EvolutionOptions, LogLevel, MutationMethod, SelectionMethod},
};
use crate::{
    error::Result,
    operators::{cycle_crossover, inversion_mutation, ordered_crossover, swap_mutation},
    point::{Point, PointSet},
    population::Population,
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy, TournamentSelection},
    tour::Tour,
};

/// Outcome of a run: the best tour found and the per-generation history.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The shortest tour of the final population.
    pub best: Tour,
    /// Best distance after generation 0, 1, ..., `generations`.
    pub history: EvolutionHistory,
    /// Number of generations evolved.
    pub generations: usize,
    /// Whether the run stopped early on a cancellation request.
    pub cancelled: bool,
}

impl EvolutionResult {
    pub fn best_distance(&self) -> f64 {
        self.best.distance()
    }
}

/// Drives a genetic algorithm over one point set.
///
/// A launcher is created in its initialized state with a random population
/// (generation 0). [`step`](Self::step) evolves one generation;
/// [`run`](Self::run) evolves a fixed number of generations and consumes the
/// launcher, returning the [`EvolutionResult`].
///
/// # Examples
///
/// ```
/// use evotsp::evolution::{EvolutionLauncher, EvolutionOptions};
/// use evotsp::point::Point;
/// use evotsp::error::Result;
///
/// fn main() -> Result<()> {
///     let points = vec![
///         Point::planar("a", 0.0, 0.0),
///         Point::planar("b", 0.0, 1.0),
///         Point::planar("c", 1.0, 1.0),
///         Point::planar("d", 1.0, 0.0),
///     ];
///     let options = EvolutionOptions::builder()
///         .population_size(20)
///         .seed(1)
///         .build();
///
///     let launcher = EvolutionLauncher::new(points, options)?;
///     let result = launcher.run(30)?;
///
///     assert_eq!(result.history.len(), 31);
///     assert!((result.best_distance() - 4.0).abs() < 1e-9);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct EvolutionLauncher {
    points: Arc<PointSet>,
    options: EvolutionOptions,
    selection: Box<dyn SelectionStrategy>,
    population: Population,
    history: EvolutionHistory,
    rng: RandomNumberGenerator,
    generation: usize,
}

impl EvolutionLauncher {
    /// Validates `points` and `options` and creates the initial population.
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not form a valid point set or the
    /// options are invalid. Nothing is evolved in that case.
    pub fn new(points: Vec<Point>, options: EvolutionOptions) -> Result<Self> {
        let points = Arc::new(PointSet::new(points)?);
        Self::with_point_set(points, options)
    }

    /// Like [`new`](Self::new), over an already validated point set.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_point_set(points: Arc<PointSet>, options: EvolutionOptions) -> Result<Self> {
        options.validate()?;

        let selection: Box<dyn SelectionStrategy> = match options.selection() {
            SelectionMethod::Tournament => {
                Box::new(TournamentSelection::new(options.tournament_size())?)
            }
            SelectionMethod::Roulette => Box::new(RouletteWheelSelection::new()),
        };

        let mut rng = match options.seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        let population = Population::random(points.clone(), options.population_size(), &mut rng)?;
        let mut history = EvolutionHistory::new();
        history.record(population.best().distance());

        debug!(
            points = points.len(),
            population = options.population_size(),
            best = population.best().distance(),
            "initialized population"
        );

        Ok(Self {
            points,
            options,
            selection,
            population,
            history,
            rng,
            generation: 0,
        })
    }

    /// Evolves one generation and records its best distance.
    ///
    /// The current population is only replaced once the whole next
    /// generation has been bred.
    ///
    /// # Errors
    ///
    /// Returns an error if parent selection fails (e.g. degenerate roulette
    /// fitness). The launcher is left at the previous generation.
    pub fn step(&mut self) -> Result<()> {
        let size = self.options.population_size();
        let mut next: Vec<Tour> = Vec::with_capacity(size + 1);

        if self.options.elitism() {
            next.push(self.population.best().clone());
        }

        let pairs = (size - next.len()).div_ceil(2);
        let seeds: Vec<u64> = (0..pairs).map(|_| self.rng.next_seed()).collect();

        let offspring: Vec<(Tour, Tour)> = if size >= self.options.parallel_threshold() {
            seeds
                .par_iter()
                .map(|&seed| self.breed_pair(seed))
                .collect::<Result<_>>()?
        } else {
            seeds
                .iter()
                .map(|&seed| self.breed_pair(seed))
                .collect::<Result<_>>()?
        };

        for (first, second) in offspring {
            next.push(first);
            next.push(second);
        }
        next.truncate(size);

        self.population = Population::from_tours(next)?;
        self.generation += 1;
        self.history.record(self.population.best().distance());
        self.log_generation();

        Ok(())
    }

    /// Breeds two children from two selected parents, using a generator
    /// seeded with `seed` for every draw.
    fn breed_pair(&self, seed: u64) -> Result<(Tour, Tour)> {
        let mut rng = RandomNumberGenerator::from_seed(seed);

        let parent_a = self.selection.select(&self.population, &mut rng)?;
        let parent_b = self.selection.select(&self.population, &mut rng)?;

        let (mut first, mut second) = if rng.probability() < self.options.crossover_rate() {
            match self.options.crossover() {
                CrossoverMethod::Ordered => {
                    ordered_crossover(parent_a.order(), parent_b.order(), &mut rng)
                }
                CrossoverMethod::Cycle => cycle_crossover(parent_a.order(), parent_b.order()),
            }
        } else {
            (parent_a.order().to_vec(), parent_b.order().to_vec())
        };

        for child in [&mut first, &mut second] {
            if rng.probability() < self.options.mutation_rate() {
                *child = match self.options.mutation() {
                    MutationMethod::Inversion => inversion_mutation(child, &mut rng),
                    MutationMethod::Swap => swap_mutation(child, &mut rng),
                };
            }
        }

        Ok((
            Tour::from_offspring(self.points.clone(), first),
            Tour::from_offspring(self.points.clone(), second),
        ))
    }

    fn log_generation(&self) {
        match self.options.log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => {
                info!(
                    generation = self.generation,
                    best = self.population.best().distance(),
                    "generation complete"
                );
            }
            LogLevel::Verbose => {
                info!(
                    generation = self.generation,
                    best = self.population.best().distance(),
                    "generation complete"
                );
                debug!(
                    generation = self.generation,
                    mean = self.population.mean_distance(),
                    worst = self.population.worst().distance(),
                    "population summary"
                );
            }
        }
    }

    /// Evolves exactly `generations` generations and returns the result.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a generation; the run is aborted.
    pub fn run(self, generations: usize) -> Result<EvolutionResult> {
        let never = AtomicBool::new(false);
        self.run_with_cancel(generations, &never)
    }

    /// Evolves up to `generations` generations, checking `cancel` before each
    /// one. A set flag stops the run with `cancelled = true` and returns the
    /// best tour found so far.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a generation; the run is aborted.
    pub fn run_with_cancel(
        mut self,
        generations: usize,
        cancel: &AtomicBool,
    ) -> Result<EvolutionResult> {
        let span = info_span!(
            "evolution",
            points = self.points.len(),
            population = self.options.population_size(),
            generations
        );
        let _enter = span.enter();

        info!(
            best = self.population.best().distance(),
            "starting evolution"
        );

        let mut cancelled = false;
        for _ in 0..generations {
            if cancel.load(Ordering::Relaxed) {
                cancelled = true;
                info!(generation = self.generation, "evolution cancelled");
                break;
            }
            self.step()?;
        }

        info!(
            generations = self.generation,
            best = self.population.best().distance(),
            "evolution finished"
        );

        Ok(EvolutionResult {
            best: self.population.best().clone(),
            history: self.history,
            generations: self.generation,
            cancelled,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best(&self) -> &Tour {
        self.population.best()
    }

    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Number of generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn point_set(&self) -> &Arc<PointSet> {
        &self.points
    }
}

/// Runs `options.num_generations()` generations over `points`.
///
/// # Errors
///
/// Returns an error if the points or options are invalid, or a generation fails.
pub fn solve(points: Vec<Point>, options: EvolutionOptions) -> Result<EvolutionResult> {
    let generations = options.num_generations();
    EvolutionLauncher::new(points, options)?.run(generations)
}
