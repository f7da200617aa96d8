pub mod error;
pub mod evolution;
pub mod operators;
pub mod point;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;
pub mod tour;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{solve, EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use point::{CoordinateSystem, Point, PointSet};
pub use report::SolutionManifest;
pub use tour::Tour;
