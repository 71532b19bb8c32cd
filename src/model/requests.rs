use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a token request sent to the OAuth endpoint
///
/// Username and password are only serialized for the credentials grant,
/// the refresh grant carries just the grant type URI (the refresh token
/// itself travels in the `refresh_token` field).
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Username (email) of the account, present for the credentials grant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password of the account, present for the credentials grant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Refresh token, present for the refresh grant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Grant type URI identifying the exchange being performed
    pub grant_type: String,
}

impl TokenRequest {
    /// Builds a credentials grant request from username and password
    pub fn credentials(username: String, password: String, grant_type: &str) -> Self {
        Self {
            username: Some(username),
            password: Some(password),
            refresh_token: None,
            grant_type: grant_type.to_string(),
        }
    }

    /// Builds a refresh grant request from a refresh token
    pub fn refresh(refresh_token: String, grant_type: &str) -> Self {
        Self {
            username: None,
            password: None,
            refresh_token: Some(refresh_token),
            grant_type: grant_type.to_string(),
        }
    }
}

/// A single API call described by method, path and optional payloads
///
/// Resource methods build one of these and hand it to the client, which
/// injects authentication and dispatches it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method of the call
    pub method: Method,
    /// Endpoint path relative to the base URL (e.g. "/lists")
    pub path: String,
    /// Optional query parameters, serialized into the URL
    pub query: Option<Value>,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request with no query parameters and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// Creates a GET request for the given path
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request for the given path
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PATCH request for the given path
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Creates a DELETE request for the given path
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches query parameters to the request
    pub fn with_query(mut self, query: Option<Value>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body to the request
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
