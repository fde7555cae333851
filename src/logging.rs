use tracing::Level;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("Unknown log level {0:?}")]
    Level(String),

    #[error(transparent)]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Resolves the configured level name; `verbose` always wins and means trace.
pub fn level(configured: &str, verbose: bool) -> Result<Level, LoggingError> {
    if verbose {
        return Ok(Level::TRACE);
    }
    configured
        .parse()
        .map_err(|_| LoggingError::Level(configured.to_owned()))
}

/// Compact logs on stderr so that stdout only carries results.
pub fn init(level: Level) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(level))
        .finish()
        .try_init()
        .map_err(|e| e.into())
}

fn filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_ascii_lowercase();
    EnvFilter::new(format!("approx={level},approx_cli={level}"))
}
