use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("Booking backend error: {0}")]
    Upstream(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
