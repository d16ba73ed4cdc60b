//! Hill Climbing (HC).
//!
//! Local search over random pairwise-swap neighbors. A neighbor replaces
//! the current route only when it is strictly shorter, so the search stalls
//! on plateaus and local optima. It always spends the full iteration budget.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
