use newsletter2go_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_missing_credentials() {
    let error = AppError::MissingCredentials;
    assert_eq!(
        error.to_string(),
        "must provide access token or authorization credentials"
    );
}

#[test]
fn test_app_error_display_missing_access_token() {
    let error = AppError::MissingAccessToken;
    assert_eq!(error.to_string(), "response missing access token");
}

#[test]
fn test_app_error_display_invalid_grant() {
    let error = AppError::InvalidGrant;
    assert_eq!(error.to_string(), "invalid grant");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through the client tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_source_chain() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(app_error.source().is_some());

    assert!(AppError::InvalidGrant.source().is_none());
}
