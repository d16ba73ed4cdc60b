//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::geometry::{tour_length, validate_cities, City};
use crate::history::history_capacity;
use crate::tour::{swap_neighbor, Tour};
use log::debug;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best route visited during the run, with its cost.
    pub best: Tour,

    /// Total number of move attempts.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost before the first move and after each attempt.
    pub cost_history: Vec<f64>,
}

/// Executes Simulated Annealing on a TSP instance.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `cities`.
    ///
    /// Fails before touching `rng` if there are fewer than two cities or
    /// the configuration is invalid.
    pub fn run<R: Rng>(cities: &[City], config: &SaConfig, rng: &mut R) -> Result<SaResult> {
        Self::run_with_callback(cities, config, rng, |_| {})
    }

    /// Runs SA, calling `on_accept` with the initial tour and with the
    /// current tour after every accepted move.
    pub fn run_with_callback<R, F>(
        cities: &[City],
        config: &SaConfig,
        rng: &mut R,
        mut on_accept: F,
    ) -> Result<SaResult>
    where
        R: Rng,
        F: FnMut(&Tour),
    {
        validate_cities(cities)?;
        config.validate()?;

        debug!(
            "simulated annealing: n={} t0={} t_min={} cooling_rate={}",
            cities.len(),
            config.initial_temperature,
            config.min_temperature,
            config.cooling_rate
        );

        let mut current = Tour::random(cities, rng);
        let mut best = current.clone();
        on_accept(&current);

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::with_capacity(history_capacity(config.iterations()));
        cost_history.push(best.cost);

        while temperature > config.min_temperature {
            let neighbor = swap_neighbor(&current.route, rng);
            let neighbor_cost = tour_length(&neighbor, cities);
            let delta = neighbor_cost - current.cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta, temperature)
            };

            if accept {
                current = Tour {
                    route: neighbor,
                    cost: neighbor_cost,
                };
                accepted_moves += 1;
                on_accept(&current);

                if current.cost < best.cost {
                    best = current.clone();
                }
            }

            cost_history.push(best.cost);
            iterations += 1;
            temperature *= config.cooling_rate;
        }

        debug!(
            "simulated annealing done: cost={:.4} iterations={} accepted={}",
            best.cost, iterations, accepted_moves
        );

        Ok(SaResult {
            best,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}

/// Probability of accepting a move that changes the cost by `delta` at
/// `temperature`.
///
/// Improving moves return 1. The result is clamped into `[0, 1]`; underflow
/// of `exp(-delta / T)`, a non-positive temperature or a NaN delta all
/// yield 0.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if temperature <= 0.0 {
        return 0.0;
    }
    let probability = (-delta / temperature).exp();
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::random::create_rng;
    use crate::tour::is_permutation;

    fn scattered(n: usize, seed: u64) -> Vec<City> {
        let mut rng = create_rng(seed);
        (0..n)
            .map(|_| City::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect()
    }

    #[test]
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(-5.0, 1.0), 1.0);
        assert_eq!(acceptance_probability(0.0, 1.0), 1.0);
        assert!((acceptance_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
        assert_eq!(acceptance_probability(1.0, 0.0), 0.0);
        assert_eq!(acceptance_probability(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn test_acceptance_underflow_is_rejection() {
        let p = acceptance_probability(1e6, 1e-300);
        assert_eq!(p, 0.0);
        let p = acceptance_probability(50.0, f64::MIN_POSITIVE);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_best_tracking() {
        let cities = scattered(15, 1);
        let mut rng = create_rng(42);
        let result = SaRunner::run(&cities, &SaConfig::default(), &mut rng).unwrap();

        assert!(is_permutation(&result.best.route, 15));
        assert_eq!(result.best.cost, tour_length(&result.best.route, &cities));
        assert_eq!(result.cost_history.len(), result.iterations + 1);
        assert!(result.best.cost <= result.cost_history[0]);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(result.cost_history.last().copied(), Some(result.best.cost));
    }

    #[test]
    fn test_best_is_minimum_of_trajectory() {
        let cities = scattered(15, 1);
        let mut rng = create_rng(42);
        let mut visited: Vec<Tour> = Vec::new();
        let result = SaRunner::run_with_callback(&cities, &SaConfig::default(), &mut rng, |t| {
            visited.push(t.clone())
        })
        .unwrap();

        assert_eq!(visited.len(), result.accepted_moves + 1);
        for tour in &visited {
            assert_eq!(tour.cost, tour_length(&tour.route, &cities));
            assert!(
                result.best.cost <= tour.cost,
                "best {} is worse than visited {}",
                result.best.cost,
                tour.cost
            );
        }
        assert!(visited.iter().any(|t| *t == result.best));
        // The random start is part of the trajectory and is beaten.
        assert!(visited.iter().any(|t| t.cost > result.best.cost));
    }

    #[test]
    fn test_callback_sees_uphill_moves() {
        let cities = scattered(10, 8);
        let config = SaConfig::default()
            .with_initial_temperature(1e6)
            .with_min_temperature(1e5)
            .with_cooling_rate(0.99);
        let mut rng = create_rng(42);
        let mut costs = Vec::new();
        let result = SaRunner::run_with_callback(&cities, &config, &mut rng, |t| costs.push(t.cost))
            .unwrap();

        let uphill = costs.windows(2).filter(|w| w[1] > w[0]).count();
        assert!(uphill > 0);
        assert_eq!(
            costs.iter().copied().fold(f64::INFINITY, f64::min),
            result.best.cost
        );
    }

    #[test]
    fn test_iteration_count_follows_schedule() {
        let cities = scattered(8, 2);
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(1.0)
            .with_cooling_rate(0.9);
        let mut rng = create_rng(42);
        let result = SaRunner::run(&cities, &config, &mut rng).unwrap();

        assert_eq!(result.iterations, config.iterations());
        assert!(result.final_temperature <= config.min_temperature);
    }

    #[test]
    fn test_accepts_uphill_when_hot() {
        let cities = scattered(12, 3);
        let config = SaConfig::default()
            .with_initial_temperature(1e9)
            .with_min_temperature(1e8)
            .with_cooling_rate(0.999);
        let mut rng = create_rng(42);
        let result = SaRunner::run(&cities, &config, &mut rng).unwrap();

        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.95, "expected near-total acceptance, got {ratio}");
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_greedy_when_cold() {
        let cities = scattered(12, 4);
        let config = SaConfig::default()
            .with_initial_temperature(1e-9)
            .with_min_temperature(1e-12)
            .with_cooling_rate(0.99);
        let mut rng = create_rng(42);
        let result = SaRunner::run(&cities, &config, &mut rng).unwrap();

        assert_eq!(result.accepted_moves, result.improving_moves);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut rng = create_rng(42);
        let err = SaRunner::run(&[], &SaConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, Error::TooFewCities { count: 0 });

        let config = SaConfig::default().with_min_temperature(5000.0);
        assert!(matches!(
            SaRunner::run(&scattered(5, 5), &config, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }
}
