use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    HttpStatusError(reqwest::StatusCode),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SolverError>;
