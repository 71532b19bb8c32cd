//! Error types for the Newsletter2Go API client
//!
//! All fallible operations in this crate return [`AppError`]. Transport and
//! JSON failures are wrapped so callers can match on a single error type.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used by all fallible operations in this crate
pub type ApiResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Neither an access token nor complete credentials were provided
    MissingCredentials,
    /// The token endpoint answered without an access token in the body
    MissingAccessToken,
    /// The API rejected the grant or the bearer token
    InvalidGrant,
    /// The API answered with an unexpected HTTP status
    Unexpected(StatusCode),
    /// Transport level failure from the HTTP client
    Request(reqwest::Error),
    /// Response body could not be parsed as JSON
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredentials => {
                write!(f, "must provide access token or authorization credentials")
            }
            AppError::MissingAccessToken => write!(f, "response missing access token"),
            AppError::InvalidGrant => write!(f, "invalid grant"),
            AppError::Unexpected(status) => write!(f, "unexpected status {status}"),
            AppError::Request(e) => write!(f, "request failed: {e}"),
            AppError::Json(e) => write!(f, "invalid json: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Request(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Request(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
