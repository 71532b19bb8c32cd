//! Authentication module for the Newsletter2Go API
//!
//! This module owns the OAuth token lifecycle:
//! - Initial token acquisition with the account credentials grant
//! - Refresh grant whenever a refresh token is cached
//! - Invalidation of stale access tokens so the client can recover

use crate::config::Config;
use crate::constants::{REFRESH_GRANT_TYPE, TOKEN_ENDPOINT, TOKEN_GRANT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::TokenRequest;
use crate::model::responses::{TokenResponse, is_invalid_grant};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Tokens currently held by the client
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    /// Access token used as bearer on API requests, None until acquired
    pub access_token: Option<String>,
    /// Refresh token used to obtain new access tokens, None until acquired
    pub refresh_token: Option<String>,
}

/// Authentication manager for the Newsletter2Go API
///
/// Handles all token operations including:
/// - Credentials grant on first use
/// - Refresh grant when a refresh token is available
/// - Clearing access tokens the API has rejected
pub struct Auth {
    config: Arc<Config>,
    client: HttpClient,
    state: Arc<RwLock<TokenState>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// Fails when the configuration carries neither an access token nor a
    /// complete set of credentials, since no token could ever be obtained.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        if config.access_token.is_none() && !config.credentials.is_complete() {
            return Err(AppError::MissingCredentials);
        }

        let client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let state = TokenState {
            access_token: config.access_token.clone(),
            refresh_token: config.refresh_token.clone(),
        };

        Ok(Self {
            config,
            client,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Returns a valid access token, requesting one if none is cached
    ///
    /// # Returns
    /// * `Ok(String)` - Access token ready to use as bearer
    /// * `Err(AppError)` - If the token endpoint rejects the grant
    pub async fn bearer_token(&self) -> Result<String, AppError> {
        let state = self.state.read().await;

        if let Some(token) = state.access_token.as_ref() {
            return Ok(token.clone());
        }

        drop(state);

        info!("No access token cached, requesting one");
        self.request_token().await
    }

    /// Requests tokens from the OAuth endpoint
    ///
    /// Uses the refresh grant when a refresh token is cached, otherwise the
    /// credentials grant. Both tokens from the response are stored in a
    /// single write so concurrent readers never observe a partial update.
    ///
    /// # Returns
    /// * `Ok(String)` - Newly acquired access token
    /// * `Err(AppError)` - If the grant is rejected or the response is malformed
    pub async fn request_token(&self) -> Result<String, AppError> {
        let body = self.grant_body().await;

        let path = TOKEN_ENDPOINT.trim_start_matches('/');
        let url = format!("{}/{}", self.config.rest_api.base_url, path);

        debug!("Requesting token with grant {}", body.grant_type);

        let auth_key = self.config.credentials.auth_key.clone().unwrap_or_default();
        let response = self
            .client
            .post(&url)
            .basic_auth(auth_key, Some(""))
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            if is_invalid_grant(&body_text) {
                warn!("Token request rejected as invalid grant");
                return Err(AppError::InvalidGrant);
            }
            warn!("Token request failed with status {}: {}", status, body_text);
            return Err(AppError::Unexpected(status));
        }

        let token_response: TokenResponse = response.json().await?;

        let Some(access_token) = token_response.access_token else {
            return Err(AppError::MissingAccessToken);
        };

        let mut state = self.state.write().await;
        state.access_token = Some(access_token.clone());
        if token_response.refresh_token.is_some() {
            state.refresh_token = token_response.refresh_token;
        }
        drop(state);

        info!("✓ Access token acquired");
        Ok(access_token)
    }

    /// Clears the cached access token so the next request acquires a new one
    ///
    /// The refresh token is kept, allowing the next acquisition to use the
    /// refresh grant instead of the full credentials grant.
    pub async fn invalidate(&self) {
        debug!("Invalidating cached access token");
        let mut state = self.state.write().await;
        state.access_token = None;
    }

    /// Returns a snapshot of the currently held tokens
    pub async fn token_state(&self) -> TokenState {
        self.state.read().await.clone()
    }

    /// Picks the grant for the next token request based on the cached state
    async fn grant_body(&self) -> TokenRequest {
        let state = self.state.read().await;

        match state.refresh_token.as_ref() {
            Some(refresh_token) => {
                TokenRequest::refresh(refresh_token.clone(), REFRESH_GRANT_TYPE)
            }
            None => {
                let username = self.config.credentials.username.clone().unwrap_or_default();
                let password = self.config.credentials.password.clone().unwrap_or_default();
                TokenRequest::credentials(username, password, TOKEN_GRANT_TYPE)
            }
        }
    }
}
