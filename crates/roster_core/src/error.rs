use thiserror::Error;

use crate::events::RosterOperation;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{operation}: request failed: {source}")]
    Request {
        operation: RosterOperation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation}: service responded {status}: {detail}")]
    Status {
        operation: RosterOperation,
        status: u16,
        detail: String,
    },
    #[error("{operation}: malformed response: {source}")]
    Decode {
        operation: RosterOperation,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    pub fn operation(&self) -> RosterOperation {
        match self {
            TransportError::Request { operation, .. }
            | TransportError::Status { operation, .. }
            | TransportError::Decode { operation, .. } => *operation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a non-negative whole number, got {input:?}")]
    NotANumber { field: &'static str, input: String },
    #[error("no salary edit in progress")]
    NoPendingEdit,
}

pub(crate) fn parse_amount<T: std::str::FromStr>(
    field: &'static str,
    input: &str,
) -> Result<T, ValidationError> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            input: input.to_string(),
        })
}

pub(crate) fn require_text(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}
