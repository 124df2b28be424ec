// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{build_portal, test_settings, SOURCE_URL};
use chrono::NaiveDate;
use jobportal::domain::models::fetch_result::FailureKind;
use jobportal::domain::models::job_posting::{filter_jobs, JobPosting, JobStatus};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_source_site(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(body_partial_json(json!({
            "url": SOURCE_URL,
            "formats": ["markdown", "html"],
            "waitFor": 3000
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_refresh_falls_back_to_illustrative_dataset() {
    let server = MockServer::start().await;
    mount_source_site(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"markdown": "# Latest Jobs", "html": "<h1>Latest Jobs</h1>"}
        })),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);
    portal.save_key("fc-good").await.unwrap();

    let jobs = portal.refresh_jobs().await.unwrap();
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs[0].title, "Staff Selection Commission (SSC) CGL 2024");

    let delhi = filter_jobs(&jobs, "delhi");
    assert_eq!(delhi.len(), 1);
    assert_eq!(delhi[0].post_count, 25271);
}

#[tokio::test]
async fn test_refresh_surfaces_provider_failure() {
    let server = MockServer::start().await;
    mount_source_site(
        &server,
        ResponseTemplate::new(429).set_body_json(json!({
            "success": false,
            "error": "Rate limit exceeded"
        })),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);
    portal.save_key("fc-good").await.unwrap();

    let failure = portal.refresh_jobs().await.unwrap_err();
    assert_eq!(failure.kind, FailureKind::ProviderFailure);
    assert_eq!(failure.reason, "Rate limit exceeded");
}

#[tokio::test]
async fn test_refresh_without_key_is_missing_credential() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let portal = build_portal(&test_settings(&server.uri(), &dir), &dir);

    let failure = portal.refresh_jobs().await.unwrap_err();
    assert_eq!(failure.kind, FailureKind::MissingCredential);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_uses_plugged_parser() {
    let server = MockServer::start().await;
    mount_source_site(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"titles": ["Bihar Police Constable 2024"]}
        })),
    )
    .await;

    let parser = |raw: &Value| -> Vec<JobPosting> {
        raw.pointer("/data/titles")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(|title| JobPosting {
                title: title.to_string(),
                organization: "Central Selection Board of Constable".to_string(),
                location: "Bihar".to_string(),
                deadline: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                post_count: 21391,
                qualification: "12th Pass".to_string(),
                link: url::Url::parse("https://csbc.bih.nic.in").unwrap(),
                status: JobStatus::Upcoming,
            })
            .collect()
    };

    let dir = TempDir::new().unwrap();
    let portal =
        build_portal(&test_settings(&server.uri(), &dir), &dir).with_parser(Arc::new(parser));
    portal.save_key("fc-good").await.unwrap();

    let jobs = portal.refresh_jobs().await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].location, "Bihar");
}
