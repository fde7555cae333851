use thiserror::Error;

use crate::{logging::LoggingError, settings::SettingsError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Could not write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("{failed} of {total} inputs could not be parsed")]
    Rejected { failed: usize, total: usize },
}
