//! Entry point for the `lokey` binary.

use std::process::ExitCode;

use clap::Parser;

use lokey::cli::{args::Cli, commands};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    commands::run(cli)
}
