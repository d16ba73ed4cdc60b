//! Genetic Algorithm for the TSP.
//!
//! Each generation the population is sorted by tour length, the best
//! [`ELITE_COUNT`] individuals survive unchanged, and the rest is refilled
//! with children of parents drawn (with replacement) from the best
//! [`PARENT_POOL`]. Children come from [`operators::order_crossover`]
//! followed by [`operators::swap_mutation`] at [`MUTATION_RATE`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size and generation count
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final tour with per-generation history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;

pub use config::{GaConfig, ELITE_COUNT, MUTATION_RATE, PARENT_POOL};
pub use runner::{GaResult, GaRunner};
