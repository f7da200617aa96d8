//! # SolutionManifest
//!
//! A plain-text summary of a solved instance: the dataset name, the total
//! distance, how many generations were evolved and the closed route.
//!
//! ```text
//! Dataset: square.csv
//! Total distance: 4.0000
//! Generations: 200
//! --------------------
//! Route:
//! a -> b -> c -> d -> a
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ResultExt};
use crate::evolution::EvolutionResult;

const SEPARATOR_WIDTH: usize = 20;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionManifest {
    dataset: String,
    total_distance: f64,
    generations: usize,
    route: Vec<String>,
    history: Vec<f64>,
}

impl SolutionManifest {
    /// Builds the manifest of `result` for the dataset called `dataset`.
    pub fn from_result(dataset: impl Into<String>, result: &EvolutionResult) -> Self {
        Self {
            dataset: dataset.into(),
            total_distance: result.best.distance(),
            generations: result.generations,
            route: result.best.points().map(|p| p.name().to_string()).collect(),
            history: result.history.as_slice().to_vec(),
        }
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Point names in visiting order, without the closing return to the start.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Best distance after each generation, starting with generation 0.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Writes the manifest text to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())
            .context(format!("Failed to write manifest to {}", path.display()))?;
        info!(path = %path.display(), "wrote solution manifest");
        Ok(())
    }
}

impl fmt::Display for SolutionManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset: {}", self.dataset)?;
        writeln!(f, "Total distance: {:.4}", self.total_distance)?;
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(f, "Route:")?;

        let mut closed = self.route.iter().chain(self.route.first());
        if let Some(first) = closed.next() {
            write!(f, "{}", first)?;
            for name in closed {
                write!(f, " -> {}", name)?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::evolution::EvolutionHistory;
    use crate::point::{Point, PointSet};
    use crate::tour::Tour;

    fn result() -> EvolutionResult {
        let set = Arc::new(
            PointSet::new(vec![
                Point::planar("a", 0.0, 0.0),
                Point::planar("b", 0.0, 1.0),
                Point::planar("c", 1.0, 1.0),
                Point::planar("d", 1.0, 0.0),
            ])
            .unwrap(),
        );
        EvolutionResult {
            best: Tour::new(set, vec![2, 1, 0, 3]).unwrap(),
            history: EvolutionHistory::new(),
            generations: 7,
            cancelled: false,
        }
    }

    #[test]
    fn test_display() {
        let manifest = SolutionManifest::from_result("square.csv", &result());
        let expected = "Dataset: square.csv\n\
                        Total distance: 4.0000\n\
                        Generations: 7\n\
                        --------------------\n\
                        Route:\n\
                        c -> b -> a -> d -> c\n";
        assert_eq!(manifest.to_string(), expected);
    }

    #[test]
    fn test_accessors() {
        let manifest = SolutionManifest::from_result("square.csv", &result());
        assert_eq!(manifest.dataset(), "square.csv");
        assert_eq!(manifest.generations(), 7);
        assert_eq!(manifest.route(), ["c", "b", "a", "d"]);
        assert!(manifest.history().is_empty());
        assert!((manifest.total_distance() - 4.0).abs() < 1e-12);
    }
}
