//! Hill climbing configuration.

use crate::error::{Error, Result};

/// Configuration for hill climbing.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_iterations(5000);
/// assert_eq!(config.max_iterations, 5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Number of neighbor evaluations. There is no early stop.
    pub max_iterations: usize,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl HcConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid_config("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(HcConfig::default().max_iterations, 1000);
        assert!(HcConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = HcConfig::default().with_max_iterations(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
