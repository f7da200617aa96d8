//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of a run: how many
//! generations to evolve, the population size, the crossover and mutation
//! rates, elitism, the tournament size, which operators to use, logging
//! verbosity, the parallel breeding threshold and an optional seed.
//!
//! ## Example
//!
//! ```rust
//! use evotsp::evolution::options::{CrossoverMethod, EvolutionOptions, LogLevel};
//!
//! // Defaults: 500 generations, 100 tours, OX1 + inversion, tournament of 3.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.population_size(), 100);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .num_generations(200)
//!     .population_size(50)
//!     .mutation_rate(0.02)
//!     .crossover(CrossoverMethod::Cycle)
//!     .log_level(LogLevel::Minimal)
//!     .seed(7)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```

use crate::error::{GeneticError, Result};

/// Verbosity of per-generation progress events.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Best distance per generation plus population mean and worst.
    Verbose,
    /// Best distance per generation.
    Minimal,
    #[default]
    None,
}

/// Parent selection operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMethod {
    #[default]
    Tournament,
    Roulette,
}

/// Crossover operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverMethod {
    /// Ordered crossover (OX1).
    #[default]
    Ordered,
    /// Cycle crossover (CX).
    Cycle,
}

/// Mutation operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationMethod {
    #[default]
    Inversion,
    Swap,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    elitism: bool,
    tournament_size: usize,
    log_level: LogLevel,
    /// Minimum population size at which offspring are bred in parallel
    parallel_threshold: usize,
    seed: Option<u64>,
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    mutation: MutationMethod,
}

impl EvolutionOptions {
    pub const DEFAULT_NUM_GENERATIONS: usize = 500;
    pub const DEFAULT_POPULATION_SIZE: usize = 100;
    pub const DEFAULT_MUTATION_RATE: f64 = 0.01;
    pub const DEFAULT_CROSSOVER_RATE: f64 = 0.9;
    pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

    pub fn new(
        num_generations: usize,
        population_size: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        elitism: bool,
    ) -> Self {
        Self {
            num_generations,
            population_size,
            mutation_rate,
            crossover_rate,
            elitism,
            ..Self::default()
        }
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if:
    /// - The population size is zero
    /// - The tournament size is zero or exceeds the population size
    ///   (only when tournament selection is used)
    /// - A rate is not a finite number in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.selection == SelectionMethod::Tournament {
            if self.tournament_size == 0 {
                return Err(GeneticError::Configuration(
                    "Tournament size must be at least 1".to_string(),
                ));
            }
            if self.tournament_size > self.population_size {
                return Err(GeneticError::Configuration(format!(
                    "Tournament size ({}) exceeds population size ({})",
                    self.tournament_size, self.population_size
                )));
            }
        }

        check_rate("Mutation rate", self.mutation_rate)?;
        check_rate("Crossover rate", self.crossover_rate)?;
        Ok(())
    }

    pub fn num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn elitism(&self) -> bool {
        self.elitism
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum population size at which breeding runs in parallel.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn selection(&self) -> SelectionMethod {
        self.selection
    }

    pub fn crossover(&self) -> CrossoverMethod {
        self.crossover
    }

    pub fn mutation(&self) -> MutationMethod {
        self.mutation
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the per-child mutation probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the per-pair crossover probability.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_elitism(&mut self, elitism: bool) {
        self.elitism = elitism;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Sets the master seed. `None` seeds from system entropy.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_selection(&mut self, selection: SelectionMethod) {
        self.selection = selection;
    }

    pub fn set_crossover(&mut self, crossover: CrossoverMethod) {
        self.crossover = crossover;
    }

    pub fn set_mutation(&mut self, mutation: MutationMethod) {
        self.mutation = mutation;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset fields fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evotsp::evolution::options::{EvolutionOptions, SelectionMethod};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(40)
    ///     .selection(SelectionMethod::Roulette)
    ///     .elitism(false)
    ///     .build();
    ///
    /// assert_eq!(options.population_size(), 40);
    /// assert_eq!(options.num_generations(), 500);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: Self::DEFAULT_NUM_GENERATIONS,
            population_size: Self::DEFAULT_POPULATION_SIZE,
            mutation_rate: Self::DEFAULT_MUTATION_RATE,
            crossover_rate: Self::DEFAULT_CROSSOVER_RATE,
            elitism: true,
            tournament_size: Self::DEFAULT_TOURNAMENT_SIZE,
            log_level: LogLevel::None,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
            selection: SelectionMethod::Tournament,
            crossover: CrossoverMethod::Ordered,
            mutation: MutationMethod::Inversion,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    elitism: Option<bool>,
    tournament_size: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
    seed: Option<u64>,
    selection: Option<SelectionMethod>,
    crossover: Option<CrossoverMethod>,
    mutation: Option<MutationMethod>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn selection(mut self, value: SelectionMethod) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn crossover(mut self, value: CrossoverMethod) -> Self {
        self.crossover = Some(value);
        self
    }

    pub fn mutation(mut self, value: MutationMethod) -> Self {
        self.mutation = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            seed: self.seed.or(defaults.seed),
            selection: self.selection.unwrap_or(defaults.selection),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            mutation: self.mutation.unwrap_or(defaults.mutation),
        }
    }
}
