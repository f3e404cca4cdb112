//! Log search side effect handlers.

use std::sync::Arc;

use opsdash_client::LogSearchRequest;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::resource::Ticket;

/// Handle loading the configured AWS profiles.
pub async fn handle_load_profiles(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
) {
    task_tracker.spawn(async move {
        let result = client.aws_profiles().await.map_err(Arc::new);
        let _ = tx.send(Action::ProfilesLoaded { ticket, result }).await;
    });
}

/// Handle loading the handlers available under a profile.
pub async fn handle_load_handlers(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    profile: String,
) {
    task_tracker.spawn(async move {
        let result = client.handlers(&profile).await.map_err(Arc::new);
        let _ = tx.send(Action::HandlersLoaded { ticket, result }).await;
    });
}

/// Handle a log search.
pub async fn handle_search_logs(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    request: LogSearchRequest,
) {
    task_tracker.spawn(async move {
        let result = client.search_logs(&request).await.map_err(Arc::new);
        if let Ok(entries) = &result {
            tracing::debug!(count = entries.len(), "Log search returned");
        }
        let _ = tx.send(Action::LogsLoaded { ticket, result }).await;
    });
}
