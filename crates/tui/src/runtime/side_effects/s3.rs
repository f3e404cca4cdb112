//! S3 browser side effect handlers.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::resource::Ticket;

/// Handle listing one level of a bucket.
pub async fn handle_list_objects(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    bucket: String,
    prefix: String,
) {
    task_tracker.spawn(async move {
        let result = client.s3_list(&bucket, &prefix).await.map_err(Arc::new);
        let _ = tx.send(Action::ObjectsListed { ticket, result }).await;
    });
}

/// Handle fetching one object for preview.
pub async fn handle_fetch_object(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    bucket: String,
    key: String,
) {
    task_tracker.spawn(async move {
        let result = client.s3_object(&bucket, &key).await.map_err(Arc::new);
        let _ = tx.send(Action::ObjectFetched { ticket, result }).await;
    });
}
