//! Permutation operators used by the GA.
//!
//! - [`order_crossover`]: segment copy from parent1, fill from parent2 in
//!   parent2's order
//! - [`swap_mutation`]: per-position swap with a random partner
//!
//! Both return or keep valid permutations of `0..n`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use crate::random::two_distinct;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order-preserving crossover producing a single child.
///
/// Two distinct positions are drawn from `0..n` and sorted into
/// `start < end`; parent1's `[start, end)` is copied into the child and the
/// remaining slots are filled left to right with parent2's cities in
/// parent2's order, skipping those already copied.
///
/// Parents with fewer than two cities are returned as a copy of parent1.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (a, b) = two_distinct(n, rng);
    let (start, end) = if a < b { (a, b) } else { (b, a) };
    order_crossover_segment(parent1, parent2, start, end)
}

/// Deterministic core of [`order_crossover`] for a given segment.
///
/// Positions `start..end` of the child equal parent1's; every other position
/// takes the next unused city of parent2.
///
/// # Panics
/// Panics if parents have different lengths, if `start > end` or `end > n`,
/// or if the parents are not permutations of the same cities.
pub fn order_crossover_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "segment {start}..{end} out of range for {n}");

    let mut child = vec![0; n];
    let mut placed = vec![false; n];

    for i in start..end {
        let city = parent1[i];
        assert!(!placed[city], "city {city} repeats in parent1's segment");
        child[i] = city;
        placed[city] = true;
    }

    let mut fill = parent2.iter().copied();
    for i in (0..start).chain(end..n) {
        let city = fill
            .by_ref()
            .find(|&city| !placed[city])
            .expect("parent2 must contain every city missing from the segment");
        child[i] = city;
        placed[city] = true;
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation applied position by position.
///
/// Each position `i` is, with probability `rate`, swapped with a uniformly
/// drawn position `j` in `0..n` (`j == i` leaves the route unchanged).
pub fn swap_mutation<R: Rng>(route: &mut [usize], rate: f64, rng: &mut R) {
    let n = route.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            route.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_permutation;

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_segment_example() {
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 3, 1, 0, 4, 2];
        let child = order_crossover_segment(&p1, &p2, 2, 4);
        // Segment [2, 3] from p1, then 5, 1, 0, 4 from p2 filling slots 0, 1, 4, 5.
        assert_eq!(child, vec![5, 1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_ox_full_segment_copies_parent1() {
        let p1 = vec![3, 0, 2, 1];
        let p2 = vec![0, 1, 2, 3];
        assert_eq!(order_crossover_segment(&p1, &p2, 0, 4), p1);
    }

    #[test]
    fn test_ox_empty_segment_copies_parent2() {
        let p1 = vec![3, 0, 2, 1];
        let p2 = vec![0, 1, 2, 3];
        assert_eq!(order_crossover_segment(&p1, &p2, 2, 2), p2);
    }

    #[test]
    #[should_panic(expected = "parent2 must contain every city")]
    fn test_ox_rejects_parent2_missing_cities() {
        // City 3 never appears in parent2, so slot 3 has nothing to take.
        order_crossover_segment(&[0, 1, 2, 3], &[0, 1, 1, 2], 0, 1);
    }

    #[test]
    #[should_panic(expected = "parent2 must contain every city")]
    fn test_ox_rejects_repeated_fill_city() {
        // A repeat in parent2 is used once; the route runs dry before slot 3.
        order_crossover_segment(&[0, 1, 2, 3], &[0, 2, 2, 1], 0, 1);
    }

    #[test]
    #[should_panic(expected = "repeats in parent1's segment")]
    fn test_ox_rejects_repeated_segment_city() {
        order_crossover_segment(&[1, 1, 2, 3], &[0, 1, 2, 3], 0, 2);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![4, 2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];
        for _ in 0..20 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert_eq!(child, vec![0, 1]);
        }
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_swap_mutation_preserves_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut route: Vec<usize> = (0..10).collect();
            swap_mutation(&mut route, 0.3, &mut rng);
            assert!(is_permutation(&route, 10));
        }
    }

    #[test]
    fn test_swap_mutation_zero_rate_is_noop() {
        let mut rng = create_rng(42);
        let mut route: Vec<usize> = (0..10).collect();
        swap_mutation(&mut route, 0.0, &mut rng);
        assert_eq!(route, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_mutation_full_rate_changes_route() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..20).collect();
        let mut route = original.clone();
        swap_mutation(&mut route, 1.0, &mut rng);
        assert!(is_permutation(&route, 20));
        assert_ne!(route, original);
    }
}
