// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{build_portal, test_settings};
use jobportal::application::portal::KeySubmission;
use jobportal::domain::models::fetch_result::{FailureKind, FetchResult};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_key_check(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(header("authorization", "Bearer fc-good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"markdown": "Example Domain"}
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(header("authorization", "Bearer bad-key"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Unauthorized: Invalid token"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_without_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);

    assert!(!portal.has_key().await);
    let result = portal.fetch_site("https://example.org").await;

    assert_eq!(result, FetchResult::missing_credential());
    assert_eq!(
        serde_json::to_value(&result).unwrap()["error"],
        "missing credential"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_key_lifecycle() {
    let server = MockServer::start().await;
    mount_key_check(&server).await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);

    assert_eq!(portal.submit_key("   ").await.unwrap(), KeySubmission::Empty);
    assert!(server.received_requests().await.unwrap().is_empty());

    assert_eq!(
        portal.submit_key("bad-key").await.unwrap(),
        KeySubmission::Rejected
    );
    assert!(!portal.has_key().await);

    assert_eq!(
        portal.submit_key("  fc-good  ").await.unwrap(),
        KeySubmission::Saved
    );
    assert!(portal.has_key().await);

    // The trimmed key is what gets stored and sent on later calls
    let stored = std::fs::read_to_string(dir.path().join("firecrawl_api_key")).unwrap();
    assert_eq!(stored, "fc-good");
}

#[tokio::test]
async fn test_validate_key_never_raises() {
    let server = MockServer::start().await;
    mount_key_check(&server).await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);

    assert!(portal.validate_key("fc-good").await);
    assert!(!portal.validate_key("bad-key").await);

    // Unreachable provider
    let offline = build_portal(&test_settings("http://127.0.0.1:9", &dir), &dir);
    assert!(!offline.validate_key("fc-good").await);
}

#[tokio::test]
async fn test_key_persists_across_portal_instances() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let settings = test_settings(&server.uri(), &dir);

    build_portal(&settings, &dir).save_key("fc-first").await.unwrap();
    build_portal(&settings, &dir).save_key("fc-second").await.unwrap();

    let reopened = build_portal(&settings, &dir);
    assert!(reopened.has_key().await);

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer fc-second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(reopened.fetch_site("https://example.org").await.is_success());
}

#[tokio::test]
async fn test_fetch_with_revoked_key_reports_invalid_credential() {
    let server = MockServer::start().await;
    mount_key_check(&server).await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);
    portal.save_key("bad-key").await.unwrap();

    let result = portal.fetch_site("https://example.org").await;
    assert_eq!(result.kind(), Some(FailureKind::InvalidCredential));
    assert_eq!(result.reason(), Some("Unauthorized: Invalid token"));
}
