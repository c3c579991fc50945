use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Unknown metric category: {0}")]
    UnknownCategory(String),
    #[error("Metric category is not configured: {0}")]
    UnconfiguredCategory(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
