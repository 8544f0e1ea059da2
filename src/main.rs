/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::stdout;
use std::path::Path;

/* Custom libraries */
use config::Config;
use render::{NullRenderer, Renderer, TerminalRenderer};
use shared::{Building, Result};
use simulation::{Clock, NoDelay, Outcome, RealClock, Simulation};

/* Modules */
mod config;
mod dispatch;
mod render;
mod shared;
mod simulation;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator_sim")
        .about("Simulates a single elevator delivering every waiting passenger")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .takes_value(true)
                .default_value("config.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .value_name("PATH")
                .takes_value(true)
                .help("Start from the building described in this file instead of a random one"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .takes_value(true)
                .help("Seed for the random initial building"),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .help("Do not draw frames or wait between them"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the outcome as JSON"),
        )
        .get_matches();

    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(Path::new(config_path)));
    if let Some(seed) = matches.value_of("seed") {
        config.simulation.seed = Some(unwrap_or_exit!(seed.parse::<u64>()));
    }

    let building = match matches.value_of("scenario") {
        Some(path) => {
            info!("Loading scenario {}", path);
            unwrap_or_exit!(simulation::load_scenario(Path::new(path))
                .and_then(|scenario| scenario.into_building(&config.building)))
        }
        None => {
            let seed = config.simulation.seed.unwrap_or_else(|| rand::thread_rng().gen());
            info!("Generating building with seed {}", seed);
            Building::random(&config.building, &mut SmallRng::seed_from_u64(seed))
        }
    };

    let outcome = if matches.is_present("headless") {
        unwrap_or_exit!(simulate(building, &config, NullRenderer, NoDelay))
    } else {
        unwrap_or_exit!(simulate(building, &config, TerminalRenderer::new(stdout()), RealClock))
    };

    if matches.is_present("json") {
        println!("{}", unwrap_or_exit!(serde_json::to_string(&outcome)));
    } else {
        println!("{}", outcome);
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

fn simulate<R: Renderer, C: Clock>(
    building: Building,
    config: &Config,
    renderer: R,
    clock: C,
) -> Result<Outcome> {
    Simulation::new(building, &config.simulation, renderer, clock).run()
}
