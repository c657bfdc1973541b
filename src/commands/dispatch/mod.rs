//! Command dispatch logic for roadtrip

use std::time::Instant;

use crate::cli::{Cli, Commands};
use roadtrip_core::error::Result;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => crate::commands::route::execute(
                ctx,
                &args.starting_city,
                &args.destination_city,
            ),
            Commands::Cities => crate::commands::cities::execute(ctx),
        }
    }
}
