//! Log search endpoint tests.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use opsdash_client::LogSearchRequest;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_profiles_and_handlers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/aws-profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["prod", "dev"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/handlers"))
        .and(query_param("profile", "prod"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!(["ingest-handler", "label-handler"])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.aws_profiles().await.unwrap(), vec!["prod", "dev"]);
    assert_eq!(
        client.handlers("prod").await.unwrap(),
        vec!["ingest-handler", "label-handler"]
    );
}

#[tokio::test]
async fn test_search_logs_posts_iso_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .and(body_json(serde_json::json!({
            "profile": "prod",
            "handler": "ingest-handler",
            "search_term": "ERROR",
            "start_time": "2024-05-01T09:00:00Z",
            "end_time": "2024-05-01T10:00:00Z"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("logs/search_results.json")),
        )
        .mount(&mock_server)
        .await;

    let request = LogSearchRequest {
        profile: "prod".into(),
        handler: "ingest-handler".into(),
        search_term: "ERROR".into(),
        start_time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    };

    let rows = client_for(&mock_server).search_logs(&request).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].log_stream, "2024/05/01/[$LATEST]4b1f");
}

#[tokio::test]
async fn test_search_logs_no_log_groups_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "404: No log groups found containing 'nope'"
        })))
        .mount(&mock_server)
        .await;

    let request = LogSearchRequest {
        profile: "prod".into(),
        handler: "nope".into(),
        search_term: "x".into(),
        start_time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    };
    let err = client_for(&mock_server).search_logs(&request).await.unwrap_err();
    assert_eq!(err.user_message(), "404: No log groups found containing 'nope'");
}
