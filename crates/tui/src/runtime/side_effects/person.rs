//! Person side effect handlers.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::resource::Ticket;

/// Handle looking up a person and their account.
pub async fn handle_lookup_person(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    person_id: String,
) {
    task_tracker.spawn(async move {
        let result = client.person_lookup(&person_id).await.map_err(Arc::new);
        let _ = tx.send(Action::PersonLoaded { ticket, result }).await;
    });
}

/// Handle enabling or disabling a person's user.
pub async fn handle_set_person_enabled(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    person_id: String,
    enabled: bool,
) {
    task_tracker.spawn(async move {
        let result = client
            .set_person_enabled(&person_id, enabled)
            .await
            .map_err(Arc::new);
        if let Err(ref e) = result {
            tracing::error!(%person_id, enabled, error = %e, "Failed to change user state");
        }
        let _ = tx.send(Action::PersonEnabledSet { ticket, result }).await;
    });
}
