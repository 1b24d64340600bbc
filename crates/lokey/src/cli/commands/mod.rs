//! Command implementations and dispatch.

pub mod facets;
pub mod guideline;
pub mod rank;
pub mod select;
mod shared;

use std::process::ExitCode;

use super::args::{Cli, Commands};
use super::context::CommandContext;

/// Dispatches to the selected subcommand.
pub fn run(cli: Cli) -> ExitCode {
    let ctx = match CommandContext::load(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    match cli.command {
        Commands::Facets(cmd) => facets::run(&ctx, &cmd),
        Commands::Select(cmd) => select::run(&ctx, &cmd),
        Commands::Rank(cmd) => rank::run(&ctx, &cmd),
        Commands::Guideline(cmd) => guideline::run(&cmd),
    }
}
