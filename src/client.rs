//! Client for the Newsletter2Go API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Automatic token acquisition on first request
//! - Transparent recovery from expired access tokens
//! - Simple API for making requests
//!
//! # Example
//! ```ignore
//! use newsletter2go_client::client::Client;
//! use newsletter2go_client::config::Config;
//!
//! let config = Config::new();
//! let client = Client::new(config)?;
//!
//! // Make requests - authentication is handled automatically
//! let users = client.get("/users", None).await?;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::is_invalid_grant;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Newsletter2Go API with automatic authentication
///
/// This client handles all authentication complexity internally, including:
/// - Initial token acquisition
/// - Bearer token injection on every request
/// - One transparent retry after the API rejects a stale token
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// No token request is made here; tokens are acquired lazily on the
    /// first API call.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the configuration carries no usable credentials
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::new();
    /// let client = Client::new(config)?;
    /// ```
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone())?);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes a GET request to the Newsletter2Go API
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g. "/users")
    /// * `query` - Optional query parameters
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed response body, `Value::Null` when empty
    /// * `Err(AppError)` - If request fails
    pub async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, AppError> {
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Makes a POST request to the Newsletter2Go API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(ApiRequest::post(path).with_body(body)).await
    }

    /// Makes a PATCH request to the Newsletter2Go API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, AppError> {
        self.send(ApiRequest::patch(path).with_body(body)).await
    }

    /// Makes a DELETE request to the Newsletter2Go API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.send(ApiRequest::delete(path)).await
    }

    /// Sends an API request, recovering once from a rejected token
    ///
    /// When the API answers 401 with an `invalid_grant` body the cached
    /// access token is cleared and the request is retried exactly once.
    /// A second rejection is returned to the caller.
    ///
    /// # Arguments
    /// * `request` - The request to dispatch
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed response body, `Value::Null` when empty
    /// * `Err(AppError)` - If request fails
    pub async fn send(&self, request: ApiRequest) -> Result<Value, AppError> {
        match self.attempt(&request).await {
            Err(AppError::InvalidGrant) => {
                warn!("Access token rejected, acquiring a new one and retrying");
                self.auth.invalidate().await;
                self.attempt(&request).await
            }
            result => result,
        }
    }

    /// Dispatches a single request attempt with the current token
    async fn attempt(&self, request: &ApiRequest) -> Result<Value, AppError> {
        let token = self.auth.bearer_token().await?;

        let path = request.path.trim_start_matches('/');
        let url = format!("{}/{}", self.config.rest_api.base_url, path);

        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), &url)
            .bearer_auth(&token);

        if let Some(query) = &request.query {
            builder = builder.query(query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            if is_invalid_grant(&body_text) {
                return Err(AppError::InvalidGrant);
            }
            warn!("Unauthorized: {}", body_text);
            return Err(AppError::Unexpected(status));
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("Request failed with status {}: {}", status, body_text);
            return Err(AppError::Unexpected(status));
        }

        Self::parse_body(response).await
    }

    /// Parses a response body, mapping empty bodies to `Value::Null`
    async fn parse_body(response: Response) -> Result<Value, AppError> {
        let text = response.text().await?;

        if text.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Convenience constructor that reads the configuration from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }
}
