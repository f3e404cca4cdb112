//! Device side effect handlers.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::resource::Ticket;

/// Handle looking up a device by ICCID.
pub async fn handle_lookup_device(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    iccid: String,
) {
    task_tracker.spawn(async move {
        let result = client.device_lookup(&iccid).await.map_err(Arc::new);
        let _ = tx.send(Action::DeviceLoaded { ticket, result }).await;
    });
}

/// Handle writing desired shadow state.
pub async fn handle_update_shadow(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    iccid: String,
    desired_state: Map<String, Value>,
) {
    task_tracker.spawn(async move {
        let fields = desired_state.len();
        let result = client
            .update_shadow(&iccid, desired_state)
            .await
            .map_err(Arc::new);
        match &result {
            Ok(_) => tracing::info!(%iccid, fields, "Shadow update sent"),
            Err(e) => tracing::error!(%iccid, fields, error = %e, "Shadow update failed"),
        }
        let _ = tx.send(Action::ShadowUpdated { ticket, result }).await;
    });
}
