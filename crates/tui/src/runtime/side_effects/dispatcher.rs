//! Side effect dispatcher.
//!
//! This module contains the main `handle_side_effects` function that routes
//! command actions to their handler functions in submodules.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{
    SharedClient, TaskTracker, batch, device, files, logs, person, reports, s3,
};

/// Handle side effects for a command action.
///
/// Spawns a background task for the work and returns. The task sends its
/// result action through `tx`. Actions that are not commands are ignored.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    if !action.is_command() {
        return;
    }

    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action_type_name(&action),
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, task_tracker).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Name of a command for tracing. Never includes field values.
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::CheckHealth => "CheckHealth",
        Action::LookupPerson { .. } => "LookupPerson",
        Action::SetPersonEnabled { .. } => "SetPersonEnabled",
        Action::LookupDevice { .. } => "LookupDevice",
        Action::UpdateShadow { .. } => "UpdateShadow",
        Action::LoadProfiles { .. } => "LoadProfiles",
        Action::LoadHandlers { .. } => "LoadHandlers",
        Action::SearchLogs { .. } => "SearchLogs",
        Action::ListObjects { .. } => "ListObjects",
        Action::FetchObject { .. } => "FetchObject",
        Action::InspectCsv { .. } => "InspectCsv",
        Action::SplitCsv { .. } => "SplitCsv",
        Action::SaveFile { .. } => "SaveFile",
        Action::LoadLabels { .. } => "LoadLabels",
        Action::LoadModemFailedCount { .. } => "LoadModemFailedCount",
        _ => "Other",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    match action {
        Action::CheckHealth => {
            reports::handle_check_health(client, tx, task_tracker).await;
        }
        Action::LookupPerson { ticket, person_id } => {
            person::handle_lookup_person(client, tx, task_tracker, ticket, person_id).await;
        }
        Action::SetPersonEnabled {
            ticket,
            person_id,
            enabled,
        } => {
            person::handle_set_person_enabled(client, tx, task_tracker, ticket, person_id, enabled)
                .await;
        }
        Action::LookupDevice { ticket, iccid } => {
            device::handle_lookup_device(client, tx, task_tracker, ticket, iccid).await;
        }
        Action::UpdateShadow {
            ticket,
            iccid,
            desired_state,
        } => {
            device::handle_update_shadow(client, tx, task_tracker, ticket, iccid, desired_state)
                .await;
        }
        Action::LoadProfiles { ticket } => {
            logs::handle_load_profiles(client, tx, task_tracker, ticket).await;
        }
        Action::LoadHandlers { ticket, profile } => {
            logs::handle_load_handlers(client, tx, task_tracker, ticket, profile).await;
        }
        Action::SearchLogs { ticket, request } => {
            logs::handle_search_logs(client, tx, task_tracker, ticket, request).await;
        }
        Action::ListObjects {
            ticket,
            bucket,
            prefix,
        } => {
            s3::handle_list_objects(client, tx, task_tracker, ticket, bucket, prefix).await;
        }
        Action::FetchObject {
            ticket,
            bucket,
            key,
        } => {
            s3::handle_fetch_object(client, tx, task_tracker, ticket, bucket, key).await;
        }
        Action::InspectCsv { ticket, path } => {
            batch::handle_inspect_csv(tx, task_tracker, ticket, path).await;
        }
        Action::SplitCsv {
            ticket,
            path,
            rows_per_chunk,
        } => {
            batch::handle_split_csv(client, tx, task_tracker, ticket, path, rows_per_chunk).await;
        }
        Action::SaveFile {
            ticket,
            origin,
            dir,
            file_name,
            bytes,
        } => {
            files::handle_save_file(tx, task_tracker, ticket, origin, dir, file_name, bytes).await;
        }
        Action::LoadLabels { ticket, day } => {
            reports::handle_load_labels(client, tx, task_tracker, ticket, day).await;
        }
        Action::LoadModemFailedCount { ticket } => {
            reports::handle_load_modem_failed_count(client, tx, task_tracker, ticket).await;
        }
        _ => {}
    }
}
