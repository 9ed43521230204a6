// errors.rs
use crate::config::ConfigError;
use crate::model::TrainerError;
use crate::scraper::ScraperError;
use crate::spreadsheets::ExportError;
use std::fmt;

/// Top-level error for the two binaries, wrapping each layer's own error.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Scraper(ScraperError),
    Export(ExportError),
    Trainer(TrainerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Scraper(e) => write!(f, "{e}"),
            AppError::Export(e) => write!(f, "{e}"),
            AppError::Trainer(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<ScraperError> for AppError {
    fn from(e: ScraperError) -> Self {
        AppError::Scraper(e)
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e)
    }
}

impl From<TrainerError> for AppError {
    fn from(e: TrainerError) -> Self {
        AppError::Trainer(e)
    }
}
