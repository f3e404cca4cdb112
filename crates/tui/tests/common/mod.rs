//! Common test utilities for TUI side effects and app flow tests.
//!
//! Uses wiremock to stand in for the operations backend.
//!
//! # Invariants
//! - Each test gets its own isolated mock server and action channel.
//! - Fixtures are loaded from the client crate's `fixtures/` directory.

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

pub use opsdash_client::OpsClient;
pub use opsdash_client::testing::load_fixture;
pub use opsdash_tui::action::Action;
pub use opsdash_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effect handlers.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub client: SharedClient,
    pub task_tracker: TaskTracker,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
        }
    }

    /// Run `handle_side_effects` and collect every action it sends.
    ///
    /// The call itself must return promptly; work belongs in spawned tasks.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
        );
        if tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be awaiting I/O instead of spawning tasks");
        }

        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(100), self.action_rx.recv()).await {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) if !actions.is_empty() && self.task_tracker.is_empty() => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }
        actions
    }
}

/// Build a client pointing at the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = OpsClient::builder()
        .base_url(mock_uri.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    std::sync::Arc::new(client)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
