//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → sort → elitism → truncation selection → crossover →
//! mutation → repeat.

use super::config::{GaConfig, MUTATION_RATE};
use super::operators::{order_crossover, swap_mutation};
use crate::error::Result;
use crate::geometry::{validate_cities, City};
use crate::history::history_capacity;
use crate::tour::Tour;
use log::{debug, trace};
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: Tour,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best cost of the initial population and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, GaRunner};
/// use tsp_metaheur::geometry::City;
/// use tsp_metaheur::random::create_rng;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 10.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
/// ];
/// let config = GaConfig::default().with_population_size(30).with_generations(30);
/// let result = GaRunner::run(&cities, &config, &mut create_rng(42)).unwrap();
/// assert!((result.best.cost - 40.0).abs() < 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on `cities`.
    ///
    /// Fails before touching `rng` if there are fewer than two cities or
    /// the configuration is invalid.
    pub fn run<R: Rng>(cities: &[City], config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        validate_cities(cities)?;
        config.validate()?;

        debug!(
            "genetic algorithm: n={} population={} generations={}",
            cities.len(),
            config.population_size,
            config.generations
        );

        // 1. Initialize population
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(cities, rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(history_capacity(config.generations));
        fitness_history.push(find_best(&population).cost);

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            // Sort population by cost (ascending = best first)
            sort_by_cost(&mut population);
            population = next_generation(&population, config, cities, MUTATION_RATE, rng);

            let gen_best = find_best(&population).cost;
            fitness_history.push(gen_best);
            trace!("generation {}: best={:.4}", gen + 1, gen_best);
        }

        let best = find_best(&population).clone();

        debug!("genetic algorithm done: cost={:.4}", best.cost);

        Ok(GaResult {
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Breeds the next population from one already sorted best-first.
///
/// The first `elite_count` tours are copied unchanged; every child has both
/// parents drawn from the first `parent_pool` ranks.
fn next_generation<R: Rng>(
    ranked: &[Tour],
    config: &GaConfig,
    cities: &[City],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Tour> {
    let pool = config.parent_pool();
    let mut next_gen: Vec<Tour> = ranked[..config.elite_count()].to_vec();

    while next_gen.len() < config.population_size {
        let p1 = &ranked[rng.random_range(0..pool)];
        let p2 = &ranked[rng.random_range(0..pool)];

        let mut child = order_crossover(&p1.route, &p2.route, rng);
        swap_mutation(&mut child, mutation_rate, rng);

        next_gen.push(Tour::evaluate(child, cities));
    }

    next_gen
}

/// Stable ascending sort by tour cost.
fn sort_by_cost(population: &mut [Tour]) {
    population.sort_by(|a, b| a.cost.total_cmp(&b.cost));
}

/// Find the first individual with the lowest cost.
fn find_best(population: &[Tour]) -> &Tour {
    population
        .iter()
        .min_by(|a, b| a.cost.total_cmp(&b.cost))
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
