//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::UnknownCategoryError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] UnknownCategoryError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("serialize {what}: {message}")]
    Serialize { what: String, message: String },
}

impl ApplicationError {
    pub fn serialize(what: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            what: what.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
