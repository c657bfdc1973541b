//! CLI argument parsing for roadtrip
//!
//! Global flags: --map, --format, --quiet, --verbose, --log-level, --log-json

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use roadtrip_core::format::OutputFormat;

/// Roadtrip - find driving routes between cities, fewest roads first
#[derive(Parser, Debug)]
#[command(name = "roadtrip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Map file (TOML) to use instead of the built-in East-coast atlas
    #[arg(long, global = true, env = "ROADTRIP_MAP")]
    pub map: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the route with the fewest roads between two cities
    Route(RouteArgs),

    /// List the cities on the map
    Cities,
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// The starting city in a route
    #[arg(long, alias = "starting_city", visible_alias = "from")]
    pub starting_city: String,

    /// The destination city in a route
    #[arg(long, alias = "destination_city", visible_alias = "to")]
    pub destination_city: String,
}
