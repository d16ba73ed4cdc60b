//! Route/cost pairs and route-level helpers.

use crate::geometry::{tour_length, City};
use crate::random::{random_route, two_distinct};
use rand::Rng;

/// A route together with the length it was evaluated to.
///
/// The cost is computed from `route` whenever a `Tour` is built, either by
/// [`Tour::evaluate`] or by a runner that has just measured the route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Visit order as indices into the city slice.
    pub route: Vec<usize>,
    /// Closed-tour length of `route`.
    pub cost: f64,
}

impl Tour {
    /// Wraps `route` with its freshly computed length.
    pub fn evaluate(route: Vec<usize>, cities: &[City]) -> Self {
        let cost = tour_length(&route, cities);
        Self { route, cost }
    }

    /// A uniformly random tour over all of `cities`.
    pub fn random<R: Rng>(cities: &[City], rng: &mut R) -> Self {
        Self::evaluate(random_route(cities.len(), rng), cities)
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Returns a copy of `route` with two distinct positions exchanged.
///
/// # Panics
/// Panics if `route` has fewer than two entries.
pub fn swap_neighbor<R: Rng>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let (i, j) = two_distinct(route.len(), rng);
    let mut neighbor = route.to_vec();
    neighbor.swap(i, j);
    neighbor
}

/// Checks that `route` is exactly a permutation of `0..n`.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in route {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
