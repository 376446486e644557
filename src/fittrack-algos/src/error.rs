use fittrack_types::ActivityCode;
use thiserror::Error;

/// Error type for reading training packages and building calculators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("unknown training type: {0}")]
    UnknownTrainingType(String),

    #[error("invalid argument count for {code}: expected {expected}, got {got}")]
    InvalidArgCount {
        code: ActivityCode,
        expected: usize,
        got: usize,
    },

    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a whole non-negative number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("{code} figures out of range: speed {speed}, calories {calories}")]
    Overflow {
        code: ActivityCode,
        speed: f64,
        calories: f64,
    },
}
