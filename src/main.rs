mod gateway;
mod geo;
mod nearby;
mod ranking;
mod report;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::gateway::Flightradar24Client;
use crate::geo::GeodeticPoint;
use crate::nearby::{nearby_aircraft, CLOSEST_RADIUS_M, LISTING_RADIUS_M};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "planespotter")]
#[command(about = "Find the aircraft flying near you")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
    /// Print the aircraft near a location
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        /// Altitude in feet
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        altitude: f64,
        /// Only describe the closest aircraft within 10 km
        #[arg(long)]
        closest: bool,
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Nearby {
            longitude,
            latitude,
            altitude,
            closest,
            config,
        } => {
            let user = GeodeticPoint::new(longitude, latitude, altitude);
            nearby(&user, closest, config.as_deref()).await
        }
    }
}

async fn serve(path: Option<&str>) -> ExitCode {
    let config = match Config::load(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn nearby(user: &GeodeticPoint, closest: bool, path: Option<&str>) -> ExitCode {
    let config = match Config::load(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let gateway = match Flightradar24Client::new(config.gateway) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error creating flight data client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let radius_m = if closest {
        CLOSEST_RADIUS_M
    } else {
        LISTING_RADIUS_M
    };

    match nearby_aircraft(&gateway, user, radius_m).await {
        Ok(ranked) => {
            if closest {
                println!("{}", report::closest(&ranked));
            } else {
                print!("{}", report::listing(&ranked));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
