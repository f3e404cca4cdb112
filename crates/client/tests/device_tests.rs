//! Device lookup and shadow update endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{body_json, method, path, query_param};

const ICCID: &str = "8944500102198304826";

#[tokio::test]
async fn test_device_lookup_full() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/device_lookup"))
        .and(query_param("iccid", ICCID))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("device/full.json")))
        .mount(&mock_server)
        .await;

    let lookup = client_for(&mock_server).device_lookup(ICCID).await.unwrap();

    let general = lookup.general.as_ref().unwrap();
    assert_eq!(general.year_of_manufacture.as_deref(), Some("2021"));
    assert_eq!(general.battery_replaced, Some(true));
    assert_eq!(
        lookup.registration.as_ref().unwrap().battery_on_registration.as_deref(),
        Some("96")
    );
    assert_eq!(
        lookup.heartbeat.as_ref().unwrap().battery_percentage.as_deref(),
        Some("74")
    );
    let iot = lookup.iot.as_ref().unwrap();
    assert_eq!(iot.jobs.as_ref().unwrap().len(), 2);
    assert_eq!(iot.shadow_last_updated(), Some("2024-05-01 08:12:50"));
    assert_eq!(lookup.shadow().unwrap()["Heartbeat-Interval"], 600);
}

#[tokio::test]
async fn test_device_lookup_bad_iccid_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/device_lookup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "Invalid ICCID format. Must be 19 or 20 digits."
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).device_lookup("123").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Invalid ICCID format. Must be 19 or 20 digits.");
}

#[tokio::test]
async fn test_update_shadow_posts_typed_values() {
    let mock_server = MockServer::start().await;

    let mut desired = serde_json::Map::new();
    desired.insert("debug".into(), serde_json::Value::Bool(true));
    desired.insert("heartbeat-interval".into(), serde_json::json!(300));

    Mock::given(method("POST"))
        .and(path("/api/update_shadow"))
        .and(body_json(serde_json::json!({
            "iccid": ICCID,
            "desired_state": {"debug": true, "heartbeat-interval": 300}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Shadow update request sent successfully."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ack = client_for(&mock_server)
        .update_shadow(ICCID, desired)
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("Shadow update request sent successfully."));
}
