use crate::common::{create_seeded_config, create_test_config};
use mockito::{Matcher, Server};
use newsletter2go_client::client::Client;
use newsletter2go_client::error::AppError;
use serde_json::{Value, json};

#[tokio::test]
async fn test_first_call_acquires_token_and_injects_bearer() {
    let mut server = Server::new_async().await;

    let token_mock = server
        .mock("POST", "/oauth/v2/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A1","refresh_token":"R1"}"#)
        .expect(1)
        .create_async()
        .await;

    let users_mock = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"value":[{"id":"u1"}]}"#)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server.url())).unwrap();

    let users = client.users().get(None).await.unwrap();
    assert_eq!(users["value"][0]["id"], "u1");

    token_mock.assert_async().await;
    users_mock.assert_async().await;
}

#[tokio::test]
async fn test_token_is_reused_across_calls() {
    let mut server = Server::new_async().await;

    let token_mock = server
        .mock("POST", "/oauth/v2/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A1"}"#)
        .expect(1)
        .create_async()
        .await;

    let users_mock = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"value":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server.url())).unwrap();

    client.users().get(None).await.unwrap();
    client.users().get(None).await.unwrap();

    token_mock.assert_async().await;
    users_mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_grant_is_recovered_once_with_refresh_grant() {
    let mut server = Server::new_async().await;

    let initial_grant = server
        .mock("POST", "/oauth/v2/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "https://nl2go.com/jwt",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A1","refresh_token":"R1"}"#)
        .expect(1)
        .create_async()
        .await;

    let refresh_grant = server
        .mock("POST", "/oauth/v2/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "https://nl2go.com/jwt_refresh",
            "refresh_token": "R1",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A2","refresh_token":"R2"}"#)
        .expect(1)
        .create_async()
        .await;

    let stale_call = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer A1")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"invalid_grant"}"#)
        .expect(1)
        .create_async()
        .await;

    let fresh_call = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer A2")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"value":[{"id":"u1"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server.url())).unwrap();

    let users = client.users().get(None).await.unwrap();
    assert_eq!(users["value"][0]["id"], "u1");

    initial_grant.assert_async().await;
    refresh_grant.assert_async().await;
    stale_call.assert_async().await;
    fresh_call.assert_async().await;
}

#[tokio::test]
async fn test_repeated_invalid_grant_is_not_retried_twice() {
    let mut server = Server::new_async().await;

    let initial_grant = server
        .mock("POST", "/oauth/v2/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "https://nl2go.com/jwt",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A1","refresh_token":"R1"}"#)
        .expect(1)
        .create_async()
        .await;

    let refresh_grant = server
        .mock("POST", "/oauth/v2/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "https://nl2go.com/jwt_refresh",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"A2"}"#)
        .expect(1)
        .create_async()
        .await;

    let rejected_calls = server
        .mock("GET", "/users")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"invalid_grant"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server.url())).unwrap();

    match client.users().get(None).await {
        Err(AppError::InvalidGrant) => (),
        other => panic!("Expected InvalidGrant, got {other:?}"),
    }

    initial_grant.assert_async().await;
    refresh_grant.assert_async().await;
    rejected_calls.assert_async().await;
}

#[tokio::test]
async fn test_other_errors_are_not_retried() {
    let mut server = Server::new_async().await;

    let missing = server
        .mock("GET", "/lists/42")
        .with_status(404)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"not_found"}"#)
        .expect(1)
        .create_async()
        .await;

    let config = create_seeded_config(&server.url(), "A1", None);
    let client = Client::new(config).unwrap();

    match client.get("/lists/42", None).await {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 404),
        other => panic!("Expected Unexpected, got {other:?}"),
    }

    missing.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_without_invalid_grant_body_is_not_retried() {
    let mut server = Server::new_async().await;

    let rejected = server
        .mock("GET", "/users")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error":"expired_token"}"#)
        .expect(1)
        .create_async()
        .await;

    let config = create_seeded_config(&server.url(), "A1", None);
    let client = Client::new(config).unwrap();

    match client.users().get(None).await {
        Err(AppError::Unexpected(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("Expected Unexpected, got {other:?}"),
    }

    rejected.assert_async().await;
}

#[tokio::test]
async fn test_seeded_access_token_skips_acquisition() {
    let mut server = Server::new_async().await;

    let users_mock = server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer seeded-token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"value":[]}"#)
        .create_async()
        .await;

    let config = create_seeded_config(&server.url(), "seeded-token", None);
    let client = Client::new(config).unwrap();

    client.users().get(None).await.unwrap();

    users_mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_response_body_maps_to_null() {
    let mut server = Server::new_async().await;

    let delete_mock = server
        .mock("DELETE", "/groups/7")
        .with_status(200)
        .create_async()
        .await;

    let config = create_seeded_config(&server.url(), "A1", None);
    let client = Client::new(config).unwrap();

    let value = client.groups().delete(7).await.unwrap();
    assert_eq!(value, Value::Null);

    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_maps_to_request_error() {
    // Nothing listens on port 1
    let config = create_seeded_config("http://127.0.0.1:1", "A1", None);
    let client = Client::new(config).unwrap();

    match client.users().get(None).await {
        Err(AppError::Request(_)) => (),
        other => panic!("Expected Request, got {other:?}"),
    }
}
