use reqwest::StatusCode;
use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("schema violation in field `{field}`: {reason}")]
    Schema { field: String, reason: String },
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        AppError::Message(msg.into())
    }

    pub fn schema<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        AppError::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Status code carried by an HTTP error response, if this is one.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Reqwest(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the remote rejected the request as unauthorized/forbidden.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self.http_status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Whether the underlying transport timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Reqwest(err) => err.is_timeout(),
            _ => false,
        }
    }
}
