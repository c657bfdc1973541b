//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use roadtrip_core::atlas;
use roadtrip_core::config::MapConfig;
use roadtrip_core::error::Result;
use roadtrip_core::graph::Graph;
use roadtrip_core::trace_time;

/// Build the graph from `--map` if given, otherwise from the built-in atlas
pub fn load_graph(cli: &Cli) -> Result<Graph> {
    let adjacency = match &cli.map {
        Some(path) => MapConfig::load(path)?.to_adjacency(),
        None => atlas::east_coast(),
    };
    Ok(Graph::build(&adjacency))
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let phase = Instant::now();
        let graph = load_graph(self.cli)?;
        trace_time!(phase, "load_graph", cities = graph.len());
        if self.cli.verbose {
            tracing::debug!(elapsed = ?self.start.elapsed(), "graph_ready");
        }
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roadtrip {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Find driving routes between cities, fewest roads first.");
        println!();
        println!("Run `roadtrip --help` for usage information.");
        Ok(())
    }
}
