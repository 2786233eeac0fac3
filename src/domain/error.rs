//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// A raw value that names no known category.
///
/// Raised where strings enter the system (CLI arguments, serialized data) and
/// are converted to [`Category`](super::Category).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {value}")]
pub struct UnknownCategoryError {
    pub value: String,
}

impl UnknownCategoryError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
