//! HTTP-level tests for `CmsClient` against a mock CMS.

use jobboard_cms::{CmsClient, CmsError, JobSource};
use jobboard_core::config::CmsConfig;
use jobboard_core::Locale;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(base_url: &str, page_size: u32, max_pages: u32) -> CmsConfig {
    CmsConfig {
        base_url: base_url.to_string(),
        token: Some("test-token".to_string()),
        summaries_collection: "jobs".to_string(),
        details_collection: "job-details".to_string(),
        default_locale: "en".parse().unwrap(),
        page_size,
        max_pages,
        timeout_secs: 5,
    }
}

fn locale(tag: &str) -> Locale {
    tag.parse().unwrap()
}

#[tokio::test]
async fn fetches_summaries_with_locale_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("locale", "de"))
        .and(query_param("pagination[page]", "1"))
        .and(query_param("pagination[pageSize]", "50"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "title": "Rust Entwickler", "stack": "Rust Axum" },
                { "id": 2, "title": "Designer" }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 50, "pageCount": 1, "total": 2 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 50, 10)).unwrap();
    let summaries = client.summaries(&locale("de")).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].stack_tokens(), vec!["Rust", "Axum"]);
}

#[tokio::test]
async fn follows_page_count() {
    let server = MockServer::start().await;

    for page in 1..=2 {
        Mock::given(method("GET"))
            .and(path("/api/job-details"))
            .and(query_param("pagination[page]", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [ { "id": page, "attributes": { "title": format!("Job {page}") } } ],
                "meta": { "pagination": { "page": page, "pageSize": 1, "pageCount": 2, "total": 2 } }
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = CmsClient::new(&config(&server.uri(), 1, 10)).unwrap();
    let details = client.details(&locale("en")).await.unwrap();

    let titles: Vec<_> = details.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Job 1", "Job 2"]);
}

#[tokio::test]
async fn stops_on_short_page_without_meta() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("pagination[page]", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "id": 1 }, { "id": 2 } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("pagination[page]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "id": 3 } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 2, 10)).unwrap();
    let summaries = client.summaries(&locale("en")).await.unwrap();
    assert_eq!(summaries.len(), 3);
}

#[tokio::test]
async fn page_limit_truncates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "id": 1 } ],
            "meta": { "pagination": { "pageCount": 99 } }
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 1, 3)).unwrap();
    let summaries = client.summaries(&locale("en")).await.unwrap();
    assert_eq!(summaries.len(), 3);
}

#[tokio::test]
async fn non_2xx_becomes_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 10, 10)).unwrap();
    match client.summaries(&locale("en")).await {
        Err(CmsError::Status { status, body, url }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
            assert!(url.ends_with("/api/jobs"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_becomes_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/job-details"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 10, 10)).unwrap();
    assert!(matches!(
        client.details(&locale("en")).await,
        Err(CmsError::Parse(_))
    ));
}

#[tokio::test]
async fn error_payload_with_200_is_not_an_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "status": 500, "name": "InternalServerError" }
        })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&config(&server.uri(), 10, 10)).unwrap();
    match client.summaries(&locale("en")).await {
        Err(CmsError::Parse(msg)) => assert!(msg.contains("data"), "{msg}"),
        other => panic!("expected Parse error, got: {other:?}"),
    }
}
