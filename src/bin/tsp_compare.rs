use clap::Parser;
use log::info;

use tsp_metaheur::compare::{compare, CompareConfig};
use tsp_metaheur::ga::GaConfig;
use tsp_metaheur::generate::{generate_cities, CityBounds};
use tsp_metaheur::hc::HcConfig;
use tsp_metaheur::random::create_rng;
use tsp_metaheur::sa::SaConfig;
use tsp_metaheur::Result;

/// Compare hill climbing, simulated annealing and a GA on random cities.
#[derive(Parser)]
struct Args {
    /// number of cities
    #[arg(long, default_value_t = 20)]
    cities: usize,

    /// RNG seed shared by generation and all three searches
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 0.0)]
    x_min: f64,

    #[arg(long, default_value_t = 100.0)]
    x_max: f64,

    #[arg(long, default_value_t = 0.0)]
    y_min: f64,

    #[arg(long, default_value_t = 100.0)]
    y_max: f64,

    /// hill climbing iterations
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// annealing start temperature
    #[arg(long, default_value_t = 1000.0)]
    initial_temp: f64,

    /// annealing temperature floor
    #[arg(long, default_value_t = 1e-3)]
    min_temp: f64,

    /// geometric cooling factor
    #[arg(long, default_value_t = 0.995)]
    cooling_rate: f64,

    /// GA population size
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// GA generations
    #[arg(long, default_value_t = 500)]
    generations: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = create_rng(args.seed);
    let bounds = CityBounds::new((args.x_min, args.x_max), (args.y_min, args.y_max));
    let cities = generate_cities(args.cities, &bounds, &mut rng)?;
    info!("generated {} cities, seed={}", cities.len(), args.seed);

    let config = CompareConfig::default()
        .with_hc(HcConfig::default().with_max_iterations(args.iterations))
        .with_sa(
            SaConfig::default()
                .with_initial_temperature(args.initial_temp)
                .with_min_temperature(args.min_temp)
                .with_cooling_rate(args.cooling_rate),
        )
        .with_ga(
            GaConfig::default()
                .with_population_size(args.population)
                .with_generations(args.generations),
        );

    let comparison = compare(&cities, &config, &mut rng)?;

    for (algorithm, tour) in &comparison.entries {
        println!("{algorithm}: {:.2}", tour.cost);
    }

    let Some((winner, tour)) = comparison.winner() else {
        return Ok(());
    };
    println!("\nBest algorithm: {winner} with cost {:.2}", tour.cost);
    println!("Visit order (original indices): {:?}", tour.route);

    println!("\nRoute:");
    let legs = comparison.legs(&cities);
    let n = legs.len();
    for (step, leg) in legs.iter().enumerate() {
        let next_step = if step + 1 < n { step + 2 } else { 1 };
        println!(
            "Step {}: city {} (index {}) -> city {} (index {}), distance: {:.2}",
            step + 1,
            step + 1,
            leg.from,
            next_step,
            leg.to,
            leg.distance
        );
    }

    Ok(())
}
