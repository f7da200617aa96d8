//! Ordered (OX1) and cycle (CX) crossover.
//!
//! OX1 keeps a contiguous block of one parent in place and fills the rest in
//! the other parent's relative order. CX keeps every position on the cycle
//! traced from index 0 at its absolute location.

use super::is_permutation;
use crate::rng::RandomNumberGenerator;

const EMPTY: usize = usize::MAX;

/// Ordered crossover with a random block `[start, end)`, `start < end`.
///
/// # Panics
///
/// Panics if the parents differ in length or hold fewer than two positions.
pub fn ordered_crossover(
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut RandomNumberGenerator,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent_a.len(), parent_b.len(), "parents must have equal length");
    let (start, end) = rng.distinct_pair(parent_a.len());
    ordered_crossover_at(parent_a, parent_b, start, end)
}

/// Ordered crossover keeping the block `[start, end)` of each template parent.
///
/// The first child copies `parent_a[start..end]` into the same slots and
/// fills the remaining slots, from index 0 upwards, with `parent_b`'s indices
/// in `parent_b`'s order, skipping those already placed. The second child is
/// the mirror image.
///
/// # Panics
///
/// Panics if the parents differ in length or `start < end <= len` does not hold.
pub fn ordered_crossover_at(
    parent_a: &[usize],
    parent_b: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent_a.len(), parent_b.len(), "parents must have equal length");
    assert!(
        start < end && end <= parent_a.len(),
        "invalid crossover block [{}, {})",
        start,
        end
    );
    debug_assert!(is_permutation(parent_a) && is_permutation(parent_b));

    let child_a = ox_build_child(parent_a, parent_b, start, end);
    let child_b = ox_build_child(parent_b, parent_a, start, end);

    debug_assert!(is_permutation(&child_a) && is_permutation(&child_b));
    (child_a, child_b)
}

fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![EMPTY; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    let mut slot = 0;
    for &gene in donor {
        if placed[gene] {
            continue;
        }
        while child[slot] != EMPTY {
            slot += 1;
        }
        child[slot] = gene;
        placed[gene] = true;
    }

    child
}

/// Cycle crossover.
///
/// For the first child, the cycle starting at index 0 is traced by jumping
/// from `i` to the position in `parent_a` of `parent_b[i]` until index 0
/// recurs. Traced positions keep `parent_a`'s value; all others take
/// `parent_b`'s. The second child traces with the roles swapped.
///
/// # Panics
///
/// Panics if the parents differ in length or are empty.
pub fn cycle_crossover(parent_a: &[usize], parent_b: &[usize]) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent_a.len(), parent_b.len(), "parents must have equal length");
    assert!(!parent_a.is_empty(), "parents must not be empty");
    debug_assert!(is_permutation(parent_a) && is_permutation(parent_b));

    let child_a = cx_build_child(parent_a, parent_b);
    let child_b = cx_build_child(parent_b, parent_a);

    debug_assert!(is_permutation(&child_a) && is_permutation(&child_b));
    (child_a, child_b)
}

/// Positions visited by the cycle through index 0, as a membership mask.
pub(crate) fn traced_cycle(primary: &[usize], secondary: &[usize]) -> Vec<bool> {
    let n = primary.len();
    let mut position = vec![0; n];
    for (i, &gene) in primary.iter().enumerate() {
        position[gene] = i;
    }

    let mut on_cycle = vec![false; n];
    let mut idx = 0;
    while !on_cycle[idx] {
        on_cycle[idx] = true;
        idx = position[secondary[idx]];
    }
    on_cycle
}

fn cx_build_child(primary: &[usize], secondary: &[usize]) -> Vec<usize> {
    traced_cycle(primary, secondary)
        .into_iter()
        .enumerate()
        .map(|(i, on_cycle)| if on_cycle { primary[i] } else { secondary[i] })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ox_known_children() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        let (c1, c2) = ordered_crossover_at(&p1, &p2, 2, 5);

        // Block [2, 5) of p1 in place, rest from p2 in p2's order.
        assert_eq!(c1, vec![7, 6, 2, 3, 4, 5, 1, 0]);
        assert_eq!(c2, vec![0, 1, 5, 4, 3, 2, 6, 7]);
    }

    #[test]
    fn test_ox_block_at_front() {
        let p1 = vec![3, 1, 0, 2];
        let p2 = vec![0, 1, 2, 3];

        let (c1, _) = ordered_crossover_at(&p1, &p2, 0, 1);
        assert_eq!(c1, vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let p = vec![4, 2, 0, 1, 3];
        for _ in 0..20 {
            let (c1, c2) = ordered_crossover(&p, &p, &mut rng);
            assert_eq!(c1, p);
            assert_eq!(c2, p);
        }
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];

        for _ in 0..20 {
            let (c1, c2) = ordered_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&c1));
            assert!(is_permutation(&c2));
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_rejects_length_mismatch() {
        ordered_crossover_at(&[0, 1, 2], &[0, 1], 0, 1);
    }

    #[test]
    fn test_cx_known_children() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![1, 2, 0, 4, 5, 3, 7, 6];

        // Cycle through 0: 0 -> pos(p2[0]=1)=1 -> pos(2)=2 -> pos(0)=0.
        let (c1, c2) = cycle_crossover(&p1, &p2);
        assert_eq!(c1, vec![0, 1, 2, 4, 5, 3, 7, 6]);
        assert_eq!(c2, vec![1, 2, 0, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_cx_single_cycle_copies_parents() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![1, 2, 3, 0];

        let (c1, c2) = cycle_crossover(&p1, &p2);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_cx_cycle_positions_keep_primary() {
        let p1 = vec![3, 0, 4, 1, 2, 5];
        let p2 = vec![0, 5, 1, 2, 3, 4];

        let mask = traced_cycle(&p1, &p2);
        let (c1, _) = cycle_crossover(&p1, &p2);
        for (i, on_cycle) in mask.into_iter().enumerate() {
            if on_cycle {
                assert_eq!(c1[i], p1[i]);
            } else {
                assert_eq!(c1[i], p2[i]);
            }
        }
        assert!(is_permutation(&c1));
    }
}
