//! Integration tests for GraphQL query execution.
//!
//! These tests verify the request sent to the GraphQL endpoint and how the
//! response envelope is interpreted.

use std::sync::Arc;

use serde_json::json;
use strategy_api::clients::graphql::{GraphqlClient, GraphqlError, GRAPHQL_PATH};
use strategy_api::{
    ApiError, ApiKey, BaseUrl, ClientConfig, HttpClient, HttpError, InMemoryCache, StrategyClient,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "{ strategyOrganizations { id title } }";

fn create_test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .build()
        .unwrap()
}

fn create_graphql_client(server: &MockServer) -> GraphqlClient {
    let transport = HttpClient::new(&create_test_config(server)).unwrap();
    GraphqlClient::new(Arc::new(transport))
}

async fn mount_graphql_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/{GRAPHQL_PATH}")))
        .and(header("x-api-key", "test-api-key"))
        .and(body_json(json!({ "query": QUERY })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// GraphqlClient Tests
// ============================================================================

#[tokio::test]
async fn test_successful_query_returns_whole_envelope() {
    let server = MockServer::start().await;
    let envelope = json!({
        "data": {"strategyOrganizations": [{"id": 1, "title": "Ministry"}]},
        "extensions": {"cost": 1}
    });
    mount_graphql_response(&server, ResponseTemplate::new(200).set_body_json(envelope.clone()))
        .await;

    let body = create_graphql_client(&server).query(QUERY).await.unwrap();
    assert_eq!(body, envelope);
}

#[tokio::test]
async fn test_reported_errors_fail_with_partial_data() {
    let server = MockServer::start().await;
    mount_graphql_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"strategyOrganizations": null},
            "errors": [{"message": "Access denied"}, {"message": "Try again"}]
        })),
    )
    .await;

    match create_graphql_client(&server).query(QUERY).await {
        Err(GraphqlError::Response(e)) => {
            assert_eq!(e.data, json!({"strategyOrganizations": null}));
            assert_eq!(e.messages(), vec!["Access denied", "Try again"]);
            assert!(e.to_string().contains("Access denied"));
        }
        other => panic!("Expected GraphQL response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_errors_without_data_default_to_empty_object() {
    let server = MockServer::start().await;
    mount_graphql_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"errors": [{"message": "Syntax error"}]})),
    )
    .await;

    match create_graphql_client(&server).query(QUERY).await {
        Err(GraphqlError::Response(e)) => assert_eq!(e.data, json!({})),
        other => panic!("Expected GraphQL response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_object_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_graphql_response(&server, ResponseTemplate::new(200).set_body_string("[1, 2]")).await;

    let result = create_graphql_client(&server).query(QUERY).await;
    assert!(matches!(result, Err(GraphqlError::Decode(_))));
}

#[tokio::test]
async fn test_error_status_is_http_error() {
    let server = MockServer::start().await;
    mount_graphql_response(&server, ResponseTemplate::new(401).set_body_string("unauthorized"))
        .await;

    let result = create_graphql_client(&server).query(QUERY).await;
    assert!(matches!(
        result,
        Err(GraphqlError::Http(HttpError::Response(ref e))) if e.code == 401
    ));
}

// ============================================================================
// StrategyClient::get_graphql Tests
// ============================================================================

#[tokio::test]
async fn test_get_graphql_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"x": 1}})))
        .expect(2)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::new());
    let client = StrategyClient::new(create_test_config(&server), cache.clone()).unwrap();

    for _ in 0..2 {
        let body = client.get_graphql(QUERY).await.unwrap();
        assert_eq!(body["data"]["x"], 1);
    }
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_get_graphql_flattens_response_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"errors": [{"message": "boom"}]})),
        )
        .mount(&server)
        .await;

    let client =
        StrategyClient::new(create_test_config(&server), Arc::new(InMemoryCache::new())).unwrap();

    match client.get_graphql(QUERY).await {
        Err(ApiError::Graphql(e)) => assert_eq!(e.errors, vec![json!({"message": "boom"})]),
        other => panic!("Expected GraphQL error, got {other:?}"),
    }
}

#[test]
fn test_graphql_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
}
