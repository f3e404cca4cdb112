//! Labels, tools and health endpoint tests.

mod common;

use common::*;
use opsdash_client::LabelDay;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_labels_today_and_tomorrow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/labels/today"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"output": "12 labels"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/labels/tomorrow"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"output": "4 labels"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.labels(LabelDay::Today).await.unwrap().output, "12 labels");
    assert_eq!(client.labels(LabelDay::Tomorrow).await.unwrap().output, "4 labels");
}

#[tokio::test]
async fn test_modem_failed_count_without_message_renders_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tools/modem-failed-count"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("reports/modem_failed_count.json")),
        )
        .mount(&mock_server)
        .await;

    let report = client_for(&mock_server).modem_failed_count().await.unwrap();
    assert!(report.message().is_none());
    assert!(report.display_text().contains("\"failed\": 3"));
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    assert_eq!(client_for(&mock_server).health().await.unwrap().status, "ok");
}
