//! # Permutation operators
//!
//! Crossover and mutation over visiting orders. Every operator takes its
//! inputs by reference and returns freshly allocated orders, so parents are
//! never modified. Outputs are always permutations of the inputs' index set.
//!
//! Each randomized operator has a deterministic `_at` / positional
//! counterpart taking explicit cut points, which is what the randomized
//! versions call after drawing them.

pub mod crossover;
pub mod mutation;

pub use crossover::{cycle_crossover, ordered_crossover, ordered_crossover_at};
pub use mutation::{invert_segment, inversion_mutation, swap_mutation, swap_positions};

/// Returns `true` if `order` holds every index of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    crate::tour::permutation_problem(order, order.len()).is_none()
}
