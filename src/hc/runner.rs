//! Hill climbing execution loop.

use super::config::HcConfig;
use crate::error::Result;
use crate::geometry::{tour_length, validate_cities, City};
use crate::history::history_capacity;
use crate::tour::{swap_neighbor, Tour};
use log::debug;
use rand::Rng;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// The route held when the budget ran out, with its cost.
    pub best: Tour,

    /// Number of neighbor evaluations performed.
    pub iterations: usize,

    /// Number of neighbors that replaced the current route.
    pub improving_moves: usize,

    /// Current cost before the first iteration and after each one.
    pub cost_history: Vec<f64>,
}

/// Executes hill climbing over swap neighbors.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing on `cities`.
    ///
    /// Fails before touching `rng` if there are fewer than two cities or
    /// the configuration is invalid.
    pub fn run<R: Rng>(cities: &[City], config: &HcConfig, rng: &mut R) -> Result<HcResult> {
        Self::run_with_callback(cities, config, rng, |_| {})
    }

    /// Runs hill climbing, calling `on_accept` with the initial tour and
    /// with every neighbor that replaces the current route.
    pub fn run_with_callback<R, F>(
        cities: &[City],
        config: &HcConfig,
        rng: &mut R,
        mut on_accept: F,
    ) -> Result<HcResult>
    where
        R: Rng,
        F: FnMut(&Tour),
    {
        validate_cities(cities)?;
        config.validate()?;

        debug!(
            "hill climbing: n={} max_iterations={}",
            cities.len(),
            config.max_iterations
        );

        let mut current = Tour::random(cities, rng);
        on_accept(&current);
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::with_capacity(history_capacity(config.max_iterations));
        cost_history.push(current.cost);

        for _ in 0..config.max_iterations {
            let neighbor = swap_neighbor(&current.route, rng);
            let neighbor_cost = tour_length(&neighbor, cities);

            if neighbor_cost < current.cost {
                current = Tour {
                    route: neighbor,
                    cost: neighbor_cost,
                };
                improving_moves += 1;
                on_accept(&current);
            }

            cost_history.push(current.cost);
        }

        debug!(
            "hill climbing done: cost={:.4} improving_moves={}",
            current.cost, improving_moves
        );

        Ok(HcResult {
            best: current,
            iterations: config.max_iterations,
            improving_moves,
            cost_history,
        })
    }
}
