use clap::{Parser, Subcommand};
use streetfind_core::config::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, ENV_ENDPOINT, ENV_LIMIT};
use streetfind_core::{Coord, SearchAction};

/// CLI arguments for streetfind
#[derive(Debug, Parser)]
#[command(
    name = "streetfind",
    version,
    about = "Find every city that has a street with the given name"
)]
pub struct CliArgs {
    /// Address-search endpoint
    #[arg(long = "endpoint", env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Maximum number of features requested from the service
    #[arg(
        long = "limit",
        env = ENV_LIMIT,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u16).range(1..),
        global = true
    )]
    pub limit: u16,

    /// Current position as LAT,LON, used for distances (e.g. 48.8566,2.3522)
    #[arg(long = "from", env = "STREETFIND_FROM", global = true, allow_hyphen_values = true)]
    pub from: Option<Coord>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List cities in the order the service ranked them
    Search {
        /// Street name without the "rue" prefix (e.g. "Victor Hugo")
        street: String,
    },

    /// List cities sorted by distance from --from
    Nearest {
        /// Street name without the "rue" prefix
        street: String,
    },

    /// Print the cities as GeoJSON map pins
    Map {
        /// Street name without the "rue" prefix
        street: String,
    },
}

impl Commands {
    pub fn street(&self) -> &str {
        match self {
            Commands::Search { street } | Commands::Nearest { street } | Commands::Map { street } => {
                street
            }
        }
    }

    pub fn action(&self) -> SearchAction {
        match self {
            Commands::Search { .. } => SearchAction::Search,
            Commands::Nearest { .. } => SearchAction::SortByDistance,
            Commands::Map { .. } => SearchAction::ShowOnMap,
        }
    }
}
