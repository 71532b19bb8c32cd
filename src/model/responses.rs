use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body returned by the OAuth token endpoint
///
/// Both fields are optional so that a malformed success response can be
/// detected instead of failing deserialization.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct TokenResponse {
    /// Access token to use as bearer on API requests
    pub access_token: Option<String>,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
}

/// Error body returned by the API on failed requests
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    /// Machine readable error code (e.g. "invalid_grant")
    pub error: Option<String>,
    /// Human readable description of the error
    pub error_description: Option<String>,
}

/// Checks whether a response body reports an `invalid_grant` error
///
/// # Arguments
/// * `body` - Raw response body text
///
/// # Returns
/// True when the body parses as an API error with code `invalid_grant`
pub fn is_invalid_grant(body: &str) -> bool {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.as_deref() == Some("invalid_grant"),
        Err(_) => false,
    }
}
