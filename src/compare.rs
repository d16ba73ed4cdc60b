//! Runs all three searches on one instance and picks the shortest tour.

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::geometry::{distance, validate_cities, City};
use crate::hc::{HcConfig, HcRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::tour::Tour;
use log::info;
use rand::Rng;
use std::fmt;

/// The search methods, in the order [`compare`] runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    HillClimbing,
    SimulatedAnnealing,
    Genetic,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::HillClimbing => "Hill Climbing",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::Genetic => "Genetic Algorithm",
        };
        f.write_str(name)
    }
}

/// Per-algorithm parameters for a comparison run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    pub hc: HcConfig,
    pub sa: SaConfig,
    pub ga: GaConfig,
}

impl CompareConfig {
    pub fn with_hc(mut self, hc: HcConfig) -> Self {
        self.hc = hc;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.hc.validate()?;
        self.sa.validate()?;
        self.ga.validate()
    }
}

/// One edge of a reported tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

/// Tours found by each algorithm, in run order.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub entries: Vec<(Algorithm, Tour)>,
}

impl Comparison {
    /// The tour found by `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> Option<&Tour> {
        self.entries
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, t)| t)
    }

    /// The shortest tour; ties go to the algorithm that ran first.
    pub fn winner(&self) -> Option<(Algorithm, &Tour)> {
        let mut best: Option<(Algorithm, &Tour)> = None;
        for (algorithm, tour) in &self.entries {
            if best.is_none_or(|(_, b)| tour.cost < b.cost) {
                best = Some((*algorithm, tour));
            }
        }
        best
    }

    /// Edges of the winning tour, including the closing edge back to the
    /// start.
    pub fn legs(&self, cities: &[City]) -> Vec<Leg> {
        let Some((_, tour)) = self.winner() else {
            return Vec::new();
        };
        let route = &tour.route;
        let n = route.len();
        (0..n)
            .map(|i| {
                let from = route[i];
                let to = route[(i + 1) % n];
                Leg {
                    from,
                    to,
                    distance: distance(&cities[from], &cities[to]),
                }
            })
            .collect()
    }
}

/// Runs hill climbing, simulated annealing and the GA in sequence, all
/// drawing from the same `rng`.
///
/// Everything is validated up front, so an invalid section fails the whole
/// comparison before any search runs.
pub fn compare<R: Rng>(cities: &[City], config: &CompareConfig, rng: &mut R) -> Result<Comparison> {
    validate_cities(cities)?;
    config.validate()?;

    let hc = HcRunner::run(cities, &config.hc, rng)?;
    info!("{}: {:.2}", Algorithm::HillClimbing, hc.best.cost);

    let sa = SaRunner::run(cities, &config.sa, rng)?;
    info!("{}: {:.2}", Algorithm::SimulatedAnnealing, sa.best.cost);

    let ga = GaRunner::run(cities, &config.ga, rng)?;
    info!("{}: {:.2}", Algorithm::Genetic, ga.best.cost);

    Ok(Comparison {
        entries: vec![
            (Algorithm::HillClimbing, hc.best),
            (Algorithm::SimulatedAnnealing, sa.best),
            (Algorithm::Genetic, ga.best),
        ],
    })
}
