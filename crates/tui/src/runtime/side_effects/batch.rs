//! CSV split side effect handlers.
//!
//! Row counting reads the whole file, so it runs on the blocking pool.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::{Action, SplitOutcome};
use crate::artifacts::{count_csv_rows, count_zip_entries};
use crate::resource::Ticket;

/// Handle counting the data rows of a local CSV file.
pub async fn handle_inspect_csv(
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    path: PathBuf,
) {
    task_tracker.spawn(async move {
        let result = match tokio::task::spawn_blocking(move || count_csv_rows(&path)).await {
            Ok(Ok(rows)) => Ok(rows),
            Ok(Err(e)) => Err(format!("{e:#}")),
            Err(e) => Err(format!("Row count task failed: {e}")),
        };
        let _ = tx.send(Action::CsvInspected { ticket, result }).await;
    });
}

/// Handle uploading a CSV file and downloading the split archive.
pub async fn handle_split_csv(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: Ticket,
    path: PathBuf,
    rows_per_chunk: NonZeroU64,
) {
    task_tracker.spawn(async move {
        let result = match client.split_csv(&path, rows_per_chunk).await {
            Ok(archive) => {
                let entries = count_zip_entries(&archive.bytes).ok();
                tracing::info!(
                    file_name = %archive.file_name,
                    bytes = archive.bytes.len(),
                    entries = ?entries,
                    "Split archive downloaded"
                );
                Ok(SplitOutcome::new(archive, entries))
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "CSV split failed");
                Err(Arc::new(e))
            }
        };
        let _ = tx.send(Action::CsvSplit { ticket, result }).await;
    });
}
