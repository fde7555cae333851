use std::ffi::OsString;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, name = "approx")]
#[command(
    about = "Parse and format durations with approximate day, week, month and year units",
    long_about = None,
)]
pub struct Cli {
    /// Log everything, including rejected inputs.
    #[arg(global = true, short, long)]
    pub verbose: bool,

    /// Large units to format with, e.g. "ywd". Overrides the settings file.
    #[arg(global = true, short, long)]
    pub units: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Parse duration strings such as 1w4d or -1.5h")]
    Parse(Parse),
    #[command(about = "Format signed nanosecond counts")]
    Format(Format),
    #[command(about = "Show or save the effective settings")]
    Config(Config),
}

#[derive(Debug, Args)]
pub struct Parse {
    /// Raw bytes are passed through, so invalid UTF-8 is reported escaped.
    #[arg(required = true)]
    pub inputs: Vec<OsString>,

    /// One JSON object per input.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct Format {
    #[arg(required = true, allow_negative_numbers = true)]
    pub nanoseconds: Vec<i64>,

    /// One JSON object per input.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct Config {
    /// Write the effective settings to the settings file.
    #[arg(long)]
    pub save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_nanoseconds() {
        let cli = Cli::try_parse_from(["approx", "format", "-5", "10", "--units", "ywd"]).unwrap();
        assert_eq!(cli.units.as_deref(), Some("ywd"));
        match cli.cmd {
            Commands::Format(format) => assert_eq!(format.nanoseconds, [-5, 10]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_requires_input() {
        assert!(Cli::try_parse_from(["approx", "parse"]).is_err());
    }
}
