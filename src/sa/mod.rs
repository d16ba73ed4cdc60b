//! Simulated Annealing (SA).
//!
//! Swap-neighbor local search that also accepts worsening moves with the
//! Metropolis probability `exp(-delta / T)`. The temperature decays
//! geometrically after every move attempt until it reaches the floor.
//! The best route seen is tracked separately from the current one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaResult, SaRunner};
