//! Fetcher Integration Tests
//!
//! Exercises the client against a mock design service:
//! - File retrieval and root selection
//! - Image URL resolution with unresolved ids
//! - Status and payload failures propagate unchanged

use design_fetch::{DesignClient, FetchConfig, FetchError, ImageFormat, TOKEN_HEADER};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DesignClient {
    DesignClient::new(FetchConfig {
        api_base: format!("{}/v1", server.uri()),
        ..FetchConfig::with_token("figd_test")
    })
    .expect("client")
}

#[tokio::test]
#[cfg_attr(
    target_os = "macos",
    ignore = "wiremock/reqwest system-configuration issue on macOS"
)]
async fn get_file_returns_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/AbC123"))
        .and(header(TOKEN_HEADER, "figd_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Landing",
            "lastModified": "2026-03-01T12:00:00Z",
            "thumbnailUrl": "https://thumbs.example/1.png",
            "version": "1234",
            "document": {
                "id": "0:0",
                "name": "Document",
                "type": "DOCUMENT",
                "children": [{
                    "id": "0:1",
                    "name": "Page 1",
                    "type": "CANVAS",
                    "children": [{ "id": "1:1", "name": "Hero", "type": "FRAME" }]
                }]
            },
            "components": {
                "2:1": { "key": "abc", "name": "Button", "description": "" }
            },
            "styles": {
                "S:1": { "key": "def", "name": "Primary", "styleType": "FILL", "description": "" }
            },
            "schemaVersion": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = client_for(&server).get_file("AbC123").await.expect("file");
    assert_eq!(file.name, "Landing");
    assert_eq!(file.version, "1234");
    assert_eq!(file.components["2:1"].name, "Button");
    assert_eq!(file.first_frame().expect("frame").name, "Hero");
}

#[tokio::test]
#[cfg_attr(
    target_os = "macos",
    ignore = "wiremock/reqwest system-configuration issue on macOS"
)]
async fn get_images_drops_unresolved_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/images/AbC123"))
        .and(query_param("ids", "1:2,1:3"))
        .and(query_param("format", "png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "err": null,
            "images": {
                "1:2": "https://renders.example/1-2.png",
                "1:3": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let images = client_for(&server)
        .get_images(
            "AbC123",
            &["1:2".to_string(), "1:3".to_string()],
            ImageFormat::Png,
        )
        .await
        .expect("images");

    assert_eq!(images.len(), 1);
    assert_eq!(images["1:2"], "https://renders.example/1-2.png");
    assert!(!images.contains_key("1:3"));
}

#[tokio::test]
#[cfg_attr(
    target_os = "macos",
    ignore = "wiremock/reqwest system-configuration issue on macOS"
)]
async fn forbidden_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/AbC123"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status": 403,
            "err": "Invalid token"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_file("AbC123")
        .await
        .expect_err("403");
    assert!(err.is_auth());
    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
#[cfg_attr(
    target_os = "macos",
    ignore = "wiremock/reqwest system-configuration issue on macOS"
)]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/AbC123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_file("AbC123")
        .await
        .expect_err("bad body");
    assert!(matches!(err, FetchError::Json(_)), "got: {err:?}");
}
