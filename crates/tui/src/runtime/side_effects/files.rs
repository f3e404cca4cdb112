//! File save side effect handler.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use super::TaskTracker;
use crate::action::{Action, SaveOrigin};
use crate::artifacts::save_bytes;
use crate::resource::Ticket;

/// Handle writing downloaded bytes into the download directory.
pub async fn handle_save_file(
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    origin: SaveOrigin,
    dir: PathBuf,
    file_name: String,
    bytes: Arc<Vec<u8>>,
) {
    task_tracker.spawn(async move {
        let result = save_bytes(&dir, &file_name, &bytes)
            .await
            .map_err(|e| format!("{e:#}"));
        if let Err(e) = &result {
            tracing::error!(?origin, %file_name, error = %e, "Save failed");
        }
        let _ = tx
            .send(Action::FileSaved {
                ticket,
                origin,
                result,
            })
            .await;
    });
}
