/// Default base URL for the Newsletter2Go REST API
pub const DEFAULT_BASE_URL: &str = "https://api.newsletter2go.com";
/// Path of the OAuth token endpoint, relative to the base URL
pub const TOKEN_ENDPOINT: &str = "/oauth/v2/token";
/// Grant type URI used when exchanging username/password credentials for tokens
pub const TOKEN_GRANT_TYPE: &str = "https://nl2go.com/jwt";
/// Grant type URI used when exchanging a refresh token for a new access token
pub const REFRESH_GRANT_TYPE: &str = "https://nl2go.com/jwt_refresh";
/// User agent string used in HTTP requests to identify this client to the Newsletter2Go API
pub const USER_AGENT: &str = "newsletters2go-rust/v0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT: u64 = 30;
