//! Random instance generation.

use crate::error::{Error, Result};
use crate::geometry::City;
use rand::Rng;

/// Coordinate ranges for generated cities, as `(min, max)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for CityBounds {
    fn default() -> Self {
        Self {
            x: (0.0, 100.0),
            y: (0.0, 100.0),
        }
    }
}

impl CityBounds {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Both ranges must be finite with `min < max` and a finite width.
    pub fn validate(&self) -> Result<()> {
        check_range("x", self.x)?;
        check_range("y", self.y)
    }
}

fn check_range(axis: &str, (lo, hi): (f64, f64)) -> Result<()> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(Error::invalid_bounds(format!(
            "{axis} range must be finite, got ({lo}, {hi})"
        )));
    }
    if lo >= hi {
        return Err(Error::invalid_bounds(format!(
            "{axis} range is empty: ({lo}, {hi})"
        )));
    }
    if !(hi - lo).is_finite() {
        return Err(Error::invalid_bounds(format!(
            "{axis} range is too wide: ({lo}, {hi})"
        )));
    }
    Ok(())
}

/// Draws `n` cities uniformly inside `bounds`.
pub fn generate_cities<R: Rng>(n: usize, bounds: &CityBounds, rng: &mut R) -> Result<Vec<City>> {
    bounds.validate()?;
    Ok((0..n)
        .map(|_| {
            City::new(
                rng.random_range(bounds.x.0..bounds.x.1),
                rng.random_range(bounds.y.0..bounds.y.1),
            )
        })
        .collect())
}
