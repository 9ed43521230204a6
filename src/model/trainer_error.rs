use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum TrainerError {
    Io(String),
    Csv(String),
    MissingColumn(String),
    InsufficientData(String),
    MissingFeature(String),
    Fit(String),
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for TrainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerError::Io(msg) => write!(f, "IO error: {msg}"),
            TrainerError::Csv(msg) => write!(f, "Malformed dataset: {msg}"),
            TrainerError::MissingColumn(name) => write!(f, "Dataset has no '{name}' column"),
            TrainerError::InsufficientData(msg) => write!(f, "Not enough data: {msg}"),
            TrainerError::MissingFeature(msg) => write!(f, "Missing feature value: {msg}"),
            TrainerError::Fit(msg) => write!(f, "Regression fit failed: {msg}"),
            TrainerError::DimensionMismatch { expected, found } => {
                write!(f, "Expected {expected} features, got {found}")
            }
        }
    }
}

impl Error for TrainerError {}

impl From<linfa::Error> for TrainerError {
    fn from(e: linfa::Error) -> Self {
        TrainerError::Fit(e.to_string())
    }
}
