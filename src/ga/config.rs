//! GA configuration.
//!
//! [`GaConfig`] holds the two tunable parameters of the evolutionary loop.
//! Elite count, parent pool and mutation rate are fixed constants.

use crate::error::{Error, Result};

/// Individuals copied unchanged into every next generation.
pub const ELITE_COUNT: usize = 10;

/// Parents are drawn from this many best-ranked individuals.
pub const PARENT_POOL: usize = 50;

/// Per-position swap probability applied to every child.
pub const MUTATION_RATE: f64 = 0.02;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// With `population_size <= ELITE_COUNT` no children are bred and the
    /// population only gets re-sorted.
    pub population_size: usize,

    /// Number of generations. There is no early stop.
    pub generations: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Number of elites actually carried over.
    pub fn elite_count(&self) -> usize {
        ELITE_COUNT.min(self.population_size)
    }

    /// Size of the best-ranked slice parents are drawn from.
    pub fn parent_pool(&self) -> usize {
        PARENT_POOL.min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid_config("population_size must be at least 1"));
        }
        if self.generations == 0 {
            return Err(Error::invalid_config("generations must be at least 1"));
        }
        Ok(())
    }
}
