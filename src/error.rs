use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Malformed data: {0}")]
    MalformedData(#[from] serde_json::Error),
    #[error("No tax bracket matches age {0}")]
    NoMatchingBracket(u32),
    #[error("Invalid tax schedule: {0}")]
    InvalidSchedule(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;
