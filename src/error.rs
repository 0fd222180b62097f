use thiserror::Error;

#[derive(Error, Debug)]
pub enum UoiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Weights: {0}")]
    InvalidWeights(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type UoiResult<T> = Result<T, UoiError>;
