//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Configuration problems (bad point sets, out-of-range rates, oversized
//! tournaments) are reported before a run starts; degenerate numeric
//! conditions met during selection are reported as they happen.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evotsp::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!("rate {} out of range", rate)));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use evotsp::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_manifest(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open solution manifest")
//! }
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evotsp::error::{GeneticError, OptionExt};
//!
//! fn shortest(distances: &[f64]) -> evotsp::error::Result<f64> {
//!     distances
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while building or evolving tours.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tour needs at least two points to form a cycle.
    #[error("Configuration error: a tour needs at least 2 points, got {found}")]
    TooFewPoints { found: usize },

    /// Points of one set must share a single coordinate system.
    #[error("Configuration error: planar and geographic points cannot be mixed")]
    MixedCoordinateSystems,

    /// Error that occurs when NaN, infinite or out-of-range coordinates are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A supplied visiting order is not a permutation of the point set.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Fitness-proportionate selection met a zero-length tour or a
    /// total fitness that is zero or not finite.
    #[error("Degenerate fitness: {0}")]
    DegenerateFitness(String),

    /// Error that occurs when an evolution process fails.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use evotsp::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> evotsp::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_context_wraps_source_message() {
        let failing: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = failing.context("Failed to write manifest").unwrap_err();

        match err {
            GeneticError::Other(msg) => {
                assert_eq!(msg, "Failed to write manifest: missing");
            }
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 3);
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(GeneticError::Io(_))));
    }

    #[test]
    fn test_too_few_points_message() {
        let err = GeneticError::TooFewPoints { found: 1 };
        assert_eq!(
            err.to_string(),
            "Configuration error: a tour needs at least 2 points, got 1"
        );
    }
}
