pub mod history;
pub mod launcher;
pub mod options;

pub use history::EvolutionHistory;
pub use launcher::{solve, EvolutionLauncher, EvolutionResult};
pub use options::{
    CrossoverMethod, EvolutionOptions, EvolutionOptionsBuilder, LogLevel, MutationMethod,
    SelectionMethod,
};
