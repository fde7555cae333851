mod cli;
mod commands;
mod errors;
mod logging;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use crate::{
    cli::{Cli, Commands},
    errors::CliError,
    settings::Settings,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("approx: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Logging depends on the settings, so a broken settings file is only
    // reported once logging is up.
    let loaded = Settings::load();
    let mut settings = loaded.as_ref().cloned().unwrap_or_default();
    if let Some(units) = cli.units {
        settings.units = units;
    }

    logging::init(logging::level(&settings.log_level, cli.verbose)?)?;
    if let Err(err) = loaded {
        warn!("{err}, using default settings");
    }

    let units = settings.units();
    let mut out = std::io::stdout().lock();
    match cli.cmd {
        Commands::Parse(parse) => commands::parse(&parse.inputs, parse.json, units, &mut out),
        Commands::Format(format) => {
            commands::format(&format.nanoseconds, format.json, units, &mut out)
        }
        Commands::Config(config) => commands::config(&settings, config.save, &mut out),
    }
}
