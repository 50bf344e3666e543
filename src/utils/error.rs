use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Error: {path} file not found.")]
    InputFileError { path: String },

    #[error("Invalid radius, expected a whole number of meters: {0}")]
    InvalidRadiusError(#[from] std::num::ParseIntError),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PlacesError>;
