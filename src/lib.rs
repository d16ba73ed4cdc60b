//! Heuristic search for short closed tours over 2-D points (Euclidean TSP).
//!
//! Provides three independent metaheuristics over the same tour model:
//!
//! - **Hill Climbing (HC)**: Random pairwise-swap neighbors, strictly
//!   improving moves only.
//! - **Simulated Annealing (SA)**: Swap neighbors with Metropolis acceptance
//!   of worsening moves under geometric cooling.
//! - **Genetic Algorithm (GA)**: Elitism, truncation selection,
//!   order-preserving crossover and swap mutation.
//!
//! # Architecture
//!
//! [`geometry`] is the cost oracle every search calls. Searches take the
//! city slice, a config and an explicit `&mut impl Rng`, and return
//! `Result<_, Error>`; invalid input is rejected before the first random
//! draw. [`compare`] runs all three on a single seeded generator.
//!
//! ```
//! use tsp_metaheur::compare::{compare, CompareConfig};
//! use tsp_metaheur::generate::{generate_cities, CityBounds};
//! use tsp_metaheur::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let cities = generate_cities(12, &CityBounds::default(), &mut rng).unwrap();
//! let comparison = compare(&cities, &CompareConfig::default(), &mut rng).unwrap();
//! let (algorithm, tour) = comparison.winner().unwrap();
//! println!("{algorithm}: {:.2}", tour.cost);
//! ```

pub mod compare;
pub mod error;
pub mod ga;
pub mod generate;
pub mod geometry;
pub mod hc;
mod history;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{Error, Result};
pub use geometry::{distance, tour_length, City};
pub use tour::Tour;
