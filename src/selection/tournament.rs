use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::tour::Tour;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` distinct tours uniformly at random
/// (without replacement) and returns the shortest one. Ties go to the tour
/// drawn first.
///
/// - A tournament size of 1 is uniform random selection.
/// - A tournament size equal to the population size always returns the best tour.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Default number of contestants per tournament.
    pub const DEFAULT_SIZE: usize = 3;

    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: Self::DEFAULT_SIZE,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select<'a>(
        &self,
        population: &'a [Tour],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Tour> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if self.tournament_size > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let mut contestants = rng
            .sample_indices(population.len(), self.tournament_size)
            .into_iter()
            .map(|i| &population[i]);

        // tournament_size >= 1, so there is always a first contestant.
        let mut winner = contestants.next().ok_or(GeneticError::EmptyPopulation)?;
        for contestant in contestants {
            if contestant.distance() < winner.distance() {
                winner = contestant;
            }
        }

        Ok(winner)
    }
}
