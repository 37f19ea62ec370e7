//! End-to-end tests through the real reqwest transport, against a
//! local wiremock server standing in for the Jina hosts.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jina_client::auth::Credential;
use jina_client::client::JinaClient;
use jina_client::config::{Config, Endpoints};
use jina_client::error::Error;
use jina_client::ops::Operation;

fn credential() -> Credential {
    Credential::new("test-key")
}

/// Client whose five endpoints all point at the mock server.
fn client_for(server: &MockServer) -> JinaClient {
    let uri = server.uri();
    let endpoints = Endpoints {
        api_base: uri.clone(),
        reader: format!("{uri}/reader-host/"),
        search: format!("{uri}/search-host/"),
        grounding: format!("{uri}/grounding-host/"),
        segmenter: format!("{uri}/segment-host/"),
    };
    let config = Config::new(endpoints, vec!["127.0.0.1".to_string()]);
    JinaClient::with_transport(
        std::sync::Arc::new(jina_client::transport::http::ReqwestTransport::new()),
        config,
    )
}

#[tokio::test]
async fn embeddings_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({
            "model": "jina-embeddings-v3",
            "input": ["Hello"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "jina-embeddings-v3",
            "data": [{"object": "embedding", "index": 0, "embedding": [0.25, -0.5]}],
            "usage": {"total_tokens": 1},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let embeddings = client
        .get_embeddings(&credential(), &["Hello".to_string()], None)
        .await
        .unwrap();

    assert_eq!(embeddings.len(), 1);
    assert_eq!(embeddings[0].embedding, vec![0.25, -0.5]);
}

#[tokio::test]
async fn reader_options_arrive_as_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reader-host/"))
        .and(header("X-No-Cache", "true"))
        .and(header("X-Timeout", "15"))
        .and(header("X-Return-Format", "markdown"))
        .and(body_json(json!({"url": "https://example.com/"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": {
                "id": "r1",
                "title": "Example",
                "content": "content",
                "url": "https://example.com/",
            },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = jina_client::ops::reader::ReaderOptions {
        no_cache: Some(true),
        timeout: Some(15),
        return_format: Some("markdown".to_string()),
        ..Default::default()
    };
    let content = client
        .read_content_with_options(&credential(), "https://example.com/", &options)
        .await
        .unwrap();
    assert_eq!(content.id, "r1");
}

#[tokio::test]
async fn unauthorized_surfaces_as_remote_401() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search-host/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_web(&credential(), "rust").await.unwrap_err();

    match &err {
        Error::Remote { operation, status, body } => {
            assert_eq!(*operation, Operation::SearchWeb);
            assert_eq!(*status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_projector_field_is_malformed_not_defaulted() {
    let server = MockServer::start().await;
    // Valid JSON, but the verdict lacks `reason` and `references`.
    Mock::given(method("POST"))
        .and(path("/grounding-host/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"factuality": 1.0, "result": true},
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .verify_statement(&credential(), "water is wet")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert_eq!(err.operation(), Operation::VerifyStatement);
}

#[tokio::test]
async fn segmenter_round_trip_forces_return_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/segment-host/"))
        .and(body_json(json!({
            "content": "One. Two.",
            "return_chunks": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "num_tokens": 6,
            "num_chunks": 2,
            "chunks": ["One.", "Two."],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let segmentation = client
        .segment_text(&credential(), "One. Two.")
        .await
        .unwrap();
    assert_eq!(segmentation.num_chunks, 2);
    assert_eq!(segmentation.chunks.len(), 2);
}

#[tokio::test]
async fn legacy_search_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reader/search"))
        .and(query_param("query", "rust"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "l1",
                "title": "Legacy item",
                "content": "legacy content",
                "url": "https://example.com/l1",
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items = client.fetch_content(&credential(), "rust").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Legacy item");
}
