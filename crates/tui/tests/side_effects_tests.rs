//! Side effect handler tests against a mock backend.

mod common;

use std::num::NonZeroU64;
use std::sync::Arc;

use common::*;
use opsdash_client::LabelDay;
use opsdash_tui::action::SaveOrigin;
use opsdash_tui::resource::Ticket;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_lookup_person_success() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/person_lookup"))
        .and(query_param("person_id", "p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("person/full.json")))
        .mount(&harness.mock_server)
        .await;

    let ticket = Ticket::next();
    let actions = harness
        .handle_and_collect(
            Action::LookupPerson {
                ticket,
                person_id: "p-1".into(),
            },
            2,
        )
        .await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::PersonLoaded { ticket: t, result } => {
            assert_eq!(*t, ticket);
            let lookup = result.as_ref().expect("lookup should succeed");
            assert!(lookup.cognito_user.as_ref().is_some_and(|u| u.enabled == Some(true)));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_person_server_error_carries_ticket() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/person_lookup"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "database unavailable"
        })))
        .mount(&harness.mock_server)
        .await;

    let ticket = Ticket::next();
    let actions = harness
        .handle_and_collect(
            Action::LookupPerson {
                ticket,
                person_id: "p-1".into(),
            },
            2,
        )
        .await;

    match &actions[..] {
        [Action::PersonLoaded { ticket: t, result: Err(e) }] => {
            assert_eq!(*t, ticket);
            assert_eq!(e.status(), Some(500));
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn test_set_person_enabled_posts_body() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/set_person_enabled_status"))
        .and(body_json(serde_json::json!({ "person_id": "p-1", "enabled": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "User disabled"
        })))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SetPersonEnabled {
                ticket: Ticket::next(),
                person_id: "p-1".into(),
                enabled: false,
            },
            2,
        )
        .await;

    assert!(matches!(
        &actions[..],
        [Action::PersonEnabledSet { result: Ok(_), .. }]
    ));
}

#[tokio::test]
async fn test_check_health() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::CheckHealth, 2).await;
    match &actions[..] {
        [Action::HealthChecked(Ok(health))] => assert_eq!(health.status, "ok"),
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn test_load_labels_keeps_day() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/labels/tomorrow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": "3 labels generated"
        })))
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::LoadLabels {
                ticket: Ticket::next(),
                day: LabelDay::Tomorrow,
            },
            2,
        )
        .await;

    assert!(matches!(
        &actions[..],
        [Action::LabelsLoaded {
            day: LabelDay::Tomorrow,
            result: Ok(_),
            ..
        }]
    ));
}

#[tokio::test]
async fn test_split_csv_downloads_archive() {
    let mut harness = SideEffectsTestHarness::new().await;
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("orders.csv");
    std::fs::write(&csv, "id\n1\n2\n3\n").unwrap();

    Mock::given(method("POST"))
        .and(path("/api/csvsplitter/split"))
        .and(query_param("rows_per_chunk", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"orders_split.zip\"")
                .set_body_bytes(b"not really a zip".to_vec()),
        )
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(
            Action::SplitCsv {
                ticket: Ticket::next(),
                path: csv,
                rows_per_chunk: NonZeroU64::new(2).unwrap(),
            },
            2,
        )
        .await;

    match &actions[..] {
        [Action::CsvSplit { result: Ok(outcome), .. }] => {
            assert_eq!(outcome.file_name, "orders_split.zip");
            assert_eq!(outcome.bytes.as_slice(), b"not really a zip");
            assert_eq!(outcome.entries, None);
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn test_inspect_csv_counts_rows() {
    let mut harness = SideEffectsTestHarness::new().await;
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("orders.csv");
    std::fs::write(&csv, "id,name\n1,a\n2,b\n").unwrap();

    let actions = harness
        .handle_and_collect(
            Action::InspectCsv {
                ticket: Ticket::next(),
                path: csv,
            },
            2,
        )
        .await;

    assert!(matches!(
        &actions[..],
        [Action::CsvInspected { result: Ok(2), .. }]
    ));
}

#[tokio::test]
async fn test_save_file_reports_path() {
    let mut harness = SideEffectsTestHarness::new().await;
    let dir = tempfile::tempdir().unwrap();

    let actions = harness
        .handle_and_collect(
            Action::SaveFile {
                ticket: Ticket::next(),
                origin: SaveOrigin::Preview,
                dir: dir.path().to_path_buf(),
                file_name: "index.png".into(),
                bytes: Arc::new(b"png".to_vec()),
            },
            2,
        )
        .await;

    match &actions[..] {
        [Action::FileSaved {
            origin: SaveOrigin::Preview,
            result: Ok(saved),
            ..
        }] => {
            assert_eq!(saved, &dir.path().join("index.png"));
            assert_eq!(std::fs::read(saved).unwrap(), b"png");
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_command_actions_are_ignored() {
    let mut harness = SideEffectsTestHarness::new().await;
    handle_side_effects(
        Action::Tick,
        harness.client.clone(),
        harness.action_tx.clone(),
        harness.task_tracker.clone(),
    )
    .await;

    assert!(harness.task_tracker.is_empty());
    assert!(harness.action_rx.try_recv().is_err());
}
