//! Configuration for the Newsletter2Go API client
//!
//! Configuration is built from environment variables (a `.env` file is loaded
//! when present) or assembled programmatically with the builder methods.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Newsletter2Go API
pub struct Credentials {
    /// Auth key of the Newsletter2Go account, used as Basic auth user at the token endpoint
    pub auth_key: Option<String>,
    /// Username (email) of the Newsletter2Go account
    pub username: Option<String>,
    /// Password of the Newsletter2Go account
    pub password: Option<String>,
}

impl Credentials {
    /// Returns true when auth key, username and password are all present
    pub fn is_complete(&self) -> bool {
        self.auth_key.is_some() && self.username.is_some() && self.password.is_some()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Newsletter2Go REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Newsletter2Go API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Access token to seed the client with, skipping the initial grant
    pub access_token: Option<String>,
    /// Refresh token to seed the client with
    pub refresh_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Reads `NEWSLETTER2GO_AUTH_KEY`, `NEWSLETTER2GO_USERNAME` and
    /// `NEWSLETTER2GO_PASSWORD` for the credentials, plus optional
    /// `NEWSLETTER2GO_BASE_URL` and `NEWSLETTER2GO_TIMEOUT` overrides.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let auth_key = get_env_or_none("NEWSLETTER2GO_AUTH_KEY");
        let username = get_env_or_none("NEWSLETTER2GO_USERNAME");
        let password = get_env_or_none("NEWSLETTER2GO_PASSWORD");

        let base_url =
            get_env_or_default("NEWSLETTER2GO_BASE_URL", String::from(DEFAULT_BASE_URL));
        let timeout = get_env_or_default("NEWSLETTER2GO_TIMEOUT", DEFAULT_TIMEOUT);

        Self {
            credentials: Credentials {
                auth_key,
                username,
                password,
            },
            rest_api: RestApiConfig { base_url, timeout },
            access_token: None,
            refresh_token: None,
        }
    }

    /// Replaces the credentials
    ///
    /// # Arguments
    /// * `auth_key` - Auth key of the account
    /// * `username` - Username (email) of the account
    /// * `password` - Password of the account
    pub fn with_credentials(
        mut self,
        auth_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Credentials {
            auth_key: Some(auth_key.into()),
            username: Some(username.into()),
            password: Some(password.into()),
        };
        self
    }

    /// Seeds the client with an existing access token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Seeds the client with an existing refresh token
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Replaces the base URL of the REST API
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
