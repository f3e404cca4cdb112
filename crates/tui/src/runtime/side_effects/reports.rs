//! Report, tool and health side effect handlers.

use std::sync::Arc;

use opsdash_client::LabelDay;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::resource::Ticket;

/// Handle the startup health probe.
pub async fn handle_check_health(client: SharedClient, tx: Sender<Action>, task_tracker: TaskTracker) {
    task_tracker.spawn(async move {
        let result = client.health().await.map_err(Arc::new);
        let _ = tx.send(Action::HealthChecked(result)).await;
    });
}

/// Handle loading the label report for a day.
pub async fn handle_load_labels(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    day: LabelDay,
) {
    task_tracker.spawn(async move {
        let result = client.labels(day).await.map_err(Arc::new);
        let _ = tx
            .send(Action::LabelsLoaded {
                ticket,
                day,
                result,
            })
            .await;
    });
}

/// Handle running the modem failed-count tool.
pub async fn handle_load_modem_failed_count(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
) {
    task_tracker.spawn(async move {
        let result = client.modem_failed_count().await.map_err(Arc::new);
        let _ = tx.send(Action::ModemFailedCountLoaded { ticket, result }).await;
    });
}
