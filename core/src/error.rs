use thiserror::Error;
use crate::model::curriculum::WeekNumber;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("target hours per week must be a positive number, got {0}")]
    InvalidTargetHours(f64),
    #[error("session hours must be greater than 0 and at most {max}, got {hours}")]
    InvalidHours { hours: f64, max: f64 },
    #[error("week {0} is outside the curriculum (1-24)")]
    WeekOutOfRange(WeekNumber),
    #[error("{0} must not be empty")]
    MissingField(&'static str),
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("could not parse {what}: '{input}'")]
    Parse { what: &'static str, input: String },
    #[error("unknown key: '{0}'")]
    UnknownKey(String),
    #[error("ambiguous key: '{key}' matches {candidates:?}")]
    AmbiguousKey { key: String, candidates: Vec<String> },
    #[error("ambiguous ID prefix '{0}'")]
    AmbiguousId(String),
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
