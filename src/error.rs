//! Error types for daymail.

use thiserror::Error;

/// Errors that can occur while building and sending a digest.
#[derive(Error, Debug)]
pub enum DaymailError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calendar file unreadable: {0}")]
    CalendarRead(#[from] std::io::Error),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),

    #[error("Mail message error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Result type alias for daymail operations.
pub type DaymailResult<T> = Result<T, DaymailError>;
