mod cli;
mod commands;
mod config;
mod prompter;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::FileConfig;

/// Exit code for rejected search parameters
const EXIT_INVALID_PARAMS: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only results
    let directive = if cli.verbose { "dgap=debug" } else { "dgap=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = FileConfig::resolve(cli.config.as_deref())?;

    match run(cli.command, &config) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<dgap::Error>() {
            Some(err) if err.is_configuration() => {
                error!("Invalid search parameters: {}", err);
                Ok(ExitCode::from(EXIT_INVALID_PARAMS))
            }
            _ => Err(e),
        },
    }
}

fn run(command: Command, config: &FileConfig) -> Result<()> {
    match command {
        Command::Search {
            params,
            format,
            output,
        } => commands::search::run(
            &params.to_params(config),
            config.format(format),
            output.as_deref(),
        ),
        Command::Eval {
            base,
            modulus_digits,
            offset,
        } => commands::eval::run(config.base(base), modulus_digits, offset),
        Command::Bounds { params } => commands::bounds::run(&params.to_params(config)),
        Command::Verify { params } => commands::verify::run(&params.to_params(config)),
        Command::Interactive => commands::interactive::run(config.format(None)),
    }
}
