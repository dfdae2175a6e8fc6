use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Restaurant {id} has rating {rating}, expected 1-3")]
    InvalidRating { id: u64, rating: u8 },

    #[error("Rating budget {0} is out of range, expected 1-6")]
    InvalidBudget(u32),

    #[error("Trip ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unsupported candidate file format: {0}")]
    UnsupportedFormat(String),

    #[error("No candidate restaurants match the request")]
    NoCandidates,

    #[error("Logger init failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, TripError>;
