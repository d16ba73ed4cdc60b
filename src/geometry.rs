//! Euclidean cost oracle.
//!
//! Cities are plain 2-D points identified by their index in the input
//! slice. A route is a permutation of those indices describing a closed
//! tour: the last city connects back to the first.

use crate::error::{Error, Result};

/// An immutable point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Length of the closed tour visiting `cities` in `route` order.
///
/// Includes the closing edge from the last city back to the first.
/// Routes with fewer than two entries have length 0.
///
/// # Panics
/// Panics if `route` holds an index outside `cities`.
pub fn tour_length(route: &[usize], cities: &[City]) -> f64 {
    let n = route.len();
    (0..n)
        .map(|i| distance(&cities[route[i]], &cities[route[(i + 1) % n]]))
        .sum()
}

/// Rejects inputs on which pairwise swaps are impossible.
pub fn validate_cities(cities: &[City]) -> Result<()> {
    if cities.len() < 2 {
        return Err(Error::TooFewCities {
            count: cities.len(),
        });
    }
    Ok(())
}
