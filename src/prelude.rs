//! # Newsletter2Go Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types
//! from the Newsletter2Go client library. By importing this prelude, you get
//! access to all the essential components needed for most API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use newsletter2go_client::prelude::*;
//!
//! // Now you have access to all the commonly used types
//! let config = Config::new();
//! // let client = Client::new(config)?;
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Newsletter2Go API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{ApiResult, AppError};

// ============================================================================
// AUTHENTICATION AND TOKEN MANAGEMENT
// ============================================================================

/// Authentication handler for the Newsletter2Go API
pub use crate::auth::{Auth, TokenState};

// ============================================================================
// CLIENT
// ============================================================================

/// API client with automatic authentication
pub use crate::client::Client;

// ============================================================================
// RESOURCE NAMESPACES
// ============================================================================

/// Accessors for the API resource endpoints
pub use crate::api::{
    attributes::Attributes,
    companies::Companies,
    forms::Forms,
    groups::Groups,
    import::Import,
    lists::{
        GroupRecipients, ListAttributes, ListGroups, ListNewsletters, ListRecipients, Lists,
    },
    newsletters::Newsletters,
    recipients::Recipients,
    users::Users,
};

// ============================================================================
// WIRE MODELS
// ============================================================================

/// Request descriptors and token request bodies
pub use crate::model::requests::{ApiRequest, TokenRequest};

/// Token and error response bodies
pub use crate::model::responses::{ApiErrorBody, TokenResponse, is_invalid_grant};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in public signatures
pub use reqwest::{Method, StatusCode};
