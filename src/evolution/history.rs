//! Best distance per generation.

use std::ops::Index;

/// Append-only record of the best tour distance at the end of each
/// generation, starting with generation 0 (the initial population).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionHistory {
    best_distances: Vec<f64>,
}

impl EvolutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, best_distance: f64) {
        self.best_distances.push(best_distance);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.best_distances
    }

    pub fn len(&self) -> usize {
        self.best_distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_distances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.best_distances.iter()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<f64> {
        self.best_distances.last().copied()
    }

    /// The smallest distance ever recorded.
    pub fn best(&self) -> Option<f64> {
        self.best_distances.iter().copied().reduce(f64::min)
    }

    /// Returns `true` if no entry is larger than its predecessor.
    pub fn is_non_increasing(&self) -> bool {
        self.best_distances.windows(2).all(|w| w[1] <= w[0])
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.best_distances
    }
}

impl Index<usize> for EvolutionHistory {
    type Output = f64;

    fn index(&self, generation: usize) -> &f64 {
        &self.best_distances[generation]
    }
}

impl<'a> IntoIterator for &'a EvolutionHistory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read() {
        let mut history = EvolutionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert_eq!(history.best(), None);

        for d in [10.0, 8.0, 8.0, 9.0] {
            history.record(d);
        }

        assert_eq!(history.len(), 4);
        assert_eq!(history[1], 8.0);
        assert_eq!(history.last(), Some(9.0));
        assert_eq!(history.best(), Some(8.0));
        assert!(!history.is_non_increasing());
        assert_eq!(history.iter().count(), 4);
        assert_eq!(history.into_vec(), vec![10.0, 8.0, 8.0, 9.0]);
    }

    #[test]
    fn test_non_increasing() {
        let mut history = EvolutionHistory::new();
        for d in [5.0, 4.0, 4.0, 3.5] {
            history.record(d);
        }
        assert!(history.is_non_increasing());
    }
}
