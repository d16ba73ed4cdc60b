//! Error type shared by every search entry point.

use thiserror::Error as ThisError;

/// Precondition failures reported before any search loop starts.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Pairwise-swap moves need at least two cities.
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities { count: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A coordinate range for city generation is unusable.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_bounds(message: impl Into<String>) -> Self {
        Self::InvalidBounds(message.into())
    }
}
