//! Swap and inversion mutation.
//!
//! Inversion reverses a segment, so only the two edges at its ends change.

use crate::rng::RandomNumberGenerator;

/// Exchanges the entries at two distinct random positions.
///
/// # Panics
///
/// Panics if `order` holds fewer than two positions.
pub fn swap_mutation(order: &[usize], rng: &mut RandomNumberGenerator) -> Vec<usize> {
    let (i, j) = rng.distinct_pair(order.len());
    swap_positions(order, i, j)
}

/// Returns a copy of `order` with positions `i` and `j` exchanged.
pub fn swap_positions(order: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut mutated = order.to_vec();
    mutated.swap(i, j);
    mutated
}

/// Reverses the inclusive segment between two distinct random positions.
///
/// # Panics
///
/// Panics if `order` holds fewer than two positions.
pub fn inversion_mutation(order: &[usize], rng: &mut RandomNumberGenerator) -> Vec<usize> {
    let (start, end) = rng.distinct_pair(order.len());
    invert_segment(order, start, end)
}

/// Returns a copy of `order` with the inclusive range `[start, end]` reversed.
///
/// # Panics
///
/// Panics if `start > end` or `end` is out of bounds.
pub fn invert_segment(order: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut mutated = order.to_vec();
    mutated[start..=end].reverse();
    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::is_permutation;

    #[test]
    fn test_swap_positions() {
        assert_eq!(swap_positions(&[0, 1, 2, 3], 0, 3), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_swap_changes_exactly_two_positions() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let original: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            let mutated = swap_mutation(&original, &mut rng);
            assert!(is_permutation(&mutated));
            let changed = original
                .iter()
                .zip(&mutated)
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_invert_segment() {
        assert_eq!(invert_segment(&[0, 1, 2, 3, 4, 5], 1, 4), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(invert_segment(&[0, 1, 2], 0, 2), vec![2, 1, 0]);
    }

    #[test]
    fn test_inversion_leaves_input_untouched() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let original = vec![4, 3, 2, 1, 0];
        let copy = original.clone();
        let mutated = inversion_mutation(&original, &mut rng);

        assert_eq!(original, copy);
        assert_ne!(mutated, original);
        assert!(is_permutation(&mutated));
    }

    #[test]
    fn test_two_element_mutations() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert_eq!(swap_mutation(&[0, 1], &mut rng), vec![1, 0]);
        assert_eq!(inversion_mutation(&[0, 1], &mut rng), vec![1, 0]);
    }
}
