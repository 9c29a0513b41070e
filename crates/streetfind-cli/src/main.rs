//! streetfind — Command-line interface for streetfind-core
//!
//! Asks the national address service which cities have a street with the
//! given name, one line per city.
//!
//! Usage examples
//! --------------
//!
//! - Cities with a "rue Victor Hugo", in service ranking order
//!   $ streetfind search "Victor Hugo"
//!
//! - Same, closest first (distances measured from --from)
//!   $ streetfind nearest "Victor Hugo" --from 48.8566,2.3522
//!
//! - GeoJSON pins for a map viewer
//!   $ streetfind map "Victor Hugo" --from 48.8566,2.3522 > pins.geojson
//!
//! Configuration
//! -------------
//!
//! `--endpoint` / `STREETFIND_ENDPOINT`, `--limit` / `STREETFIND_LIMIT` and
//! `--from` / `STREETFIND_FROM`. Log verbosity is read from `STREETFIND_LOG`
//! (default `warn`); logs go to stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use streetfind_core::map::pins_to_geojson;
use streetfind_core::{
    CityResult, FixedLocation, HttpGeocoder, LocationProvider, NoLocation, SearchConfig,
    SearchError, SearchSession, StreetSearch,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("STREETFIND_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let config = SearchConfig {
        endpoint: args.endpoint.clone(),
        limit: args.limit,
        ..SearchConfig::default()
    };
    let geocoder = HttpGeocoder::new(&config).context("failed to set up HTTP client")?;

    let fixed = args.from.map(FixedLocation);
    let location: &dyn LocationProvider = match &fixed {
        Some(fixed) => fixed,
        None => &NoLocation,
    };

    let search = StreetSearch::new(geocoder, location, config);
    let session = SearchSession::new();
    let report = session.run(&search, args.command.street(), args.command.action());

    match report.result {
        Ok(outcome) => match args.command {
            Commands::Map { .. } => {
                println!("{}", serde_json::to_string_pretty(&pins_to_geojson(&outcome.cities))?);
            }
            Commands::Search { .. } | Commands::Nearest { .. } => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&outcome.cities)?);
                } else {
                    for city in &outcome.cities {
                        println!("{}", format_city(city));
                    }
                }
            }
        },
        // Informational, not a failure.
        Err(err @ SearchError::NoMatch { .. }) => {
            if args.json {
                println!("[]");
            }
            eprintln!("{err}");
        }
        Err(err) => bail!("{err}"),
    }

    Ok(())
}

fn format_city(city: &CityResult) -> String {
    match city.distance_km {
        Some(d) => format!("{} — {:.1} km", city.name, d),
        None => city.name.clone(),
    }
}
