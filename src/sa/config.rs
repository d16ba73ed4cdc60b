//! SA configuration.

use crate::error::{Error, Result};

/// Configuration for simulated annealing with geometric cooling.
///
/// One move is attempted per temperature step, after which
/// `T <- T * cooling_rate`. The run ends once `T <= min_temperature`, so the
/// number of iterations is
/// `ceil(ln(min_temperature / initial_temperature) / ln(cooling_rate))`.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.999);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Temperature floor. The loop stops when T drops to or below this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-3,
            cooling_rate: 0.995,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Number of move attempts this schedule performs.
    pub fn iterations(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut count = 0usize;
        while temperature > self.min_temperature {
            temperature *= self.cooling_rate;
            count += 1;
        }
        count
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        if self.initial_temperature <= self.min_temperature {
            return Err(Error::invalid_config(
                "initial_temperature must be greater than min_temperature",
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::invalid_config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
