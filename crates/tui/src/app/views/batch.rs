//! CSV splitter form.
//!
//! Responsibilities:
//! - Validate the CSV path and rows-per-chunk before uploading.
//! - Count the file's rows locally to show the expected chunk count.
//! - Hold the returned archive until it is saved or replaced.
//!
//! Invariants:
//! - Editing the path releases the current archive and row count.
//! - A new split releases the previous archive before the upload starts.
//! - Rows per chunk is at least 1 by construction (`NonZeroU64`).

use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_config::BatchConfig;

use crate::action::{Action, ApiResult, SaveOrigin, SplitOutcome};
use crate::app::input::SingleLineInput;
use crate::app::views::{Outcome, step_focus};
use crate::artifacts::expected_chunks;
use crate::resource::{RemoteResource, Ticket};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchFocus {
    #[default]
    Path,
    Rows,
    Split,
    Save,
}

impl BatchFocus {
    const ORDER: [BatchFocus; 4] = [
        BatchFocus::Path,
        BatchFocus::Rows,
        BatchFocus::Split,
        BatchFocus::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Row count of one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub path: PathBuf,
    pub rows: u64,
}

/// Parse the rows-per-chunk field.
pub fn parse_rows_per_chunk(text: &str) -> Result<NonZeroU64, ValidationError> {
    text.trim()
        .parse::<u64>()
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| ValidationError::InvalidRowsPerChunk(text.to_string()))
}

#[derive(Debug)]
pub struct BatchView {
    download_dir: PathBuf,
    pub focus: BatchFocus,
    pub path: SingleLineInput,
    pub rows: SingleLineInput,
    pub inspection: RemoteResource<Inspection>,
    pub split: RemoteResource<SplitOutcome>,
    pub saved_to: Option<PathBuf>,
    save: Option<Ticket>,
}

impl BatchView {
    pub fn new(config: &BatchConfig) -> Self {
        Self {
            download_dir: config.download_dir.clone(),
            focus: BatchFocus::Path,
            path: SingleLineInput::with_placeholder("/path/to/orders.csv"),
            rows: SingleLineInput::with_value(config.default_rows_per_chunk.to_string()),
            inspection: RemoteResource::new(),
            split: RemoteResource::new(),
            saved_to: None,
            save: None,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn captures_text(&self) -> bool {
        matches!(self.focus, BatchFocus::Path | BatchFocus::Rows)
    }

    /// `ceil(rows / rows_per_chunk)` once the file has been counted.
    pub fn expected_chunks(&self) -> Option<u64> {
        let rows = self.inspection.ready()?.rows;
        let per_chunk = parse_rows_per_chunk(self.rows.value()).ok()?;
        Some(expected_chunks(rows, per_chunk.get()))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if let Some(next) = step_focus(self.focus.index(), BatchFocus::ORDER.len(), &key) {
            let leaving_path = self.focus == BatchFocus::Path;
            self.focus = BatchFocus::ORDER[next];
            if leaving_path && self.inspection.is_idle() {
                return self.inspect(false);
            }
            return Outcome::none();
        }

        match (self.focus, key.code) {
            (BatchFocus::Path, KeyCode::Enter) => self.inspect(true),
            (BatchFocus::Path, _) => {
                if self.path.handle_key(key) {
                    self.release();
                }
                Outcome::none()
            }
            (BatchFocus::Rows, KeyCode::Enter) | (BatchFocus::Split, KeyCode::Enter) => {
                self.submit()
            }
            (BatchFocus::Rows, _) => {
                self.rows.handle_key(key);
                Outcome::none()
            }
            (BatchFocus::Save, KeyCode::Enter) => self.save_archive(),
            _ => Outcome::none(),
        }
    }

    /// Drop the archive and row count tied to the previous path.
    fn release(&mut self) {
        if self.split.ready().is_some() {
            tracing::debug!("Releasing split archive after path change");
        }
        self.split.reset();
        self.inspection.reset();
        self.saved_to = None;
        self.save = None;
    }

    fn validated_path(&self) -> Result<PathBuf, ValidationError> {
        let text = self.path.value().trim();
        if text.is_empty() {
            return Err(ValidationError::MissingFile);
        }
        let path = PathBuf::from(text);
        if !path.is_file() {
            return Err(ValidationError::FileNotFound(path));
        }
        Ok(path)
    }

    /// Count rows of the current file. `report` controls whether a bad path
    /// is reported or silently skipped.
    fn inspect(&mut self, report: bool) -> Outcome {
        match self.validated_path() {
            Ok(path) => {
                let ticket = self.inspection.begin();
                Outcome::command(Action::InspectCsv { ticket, path })
            }
            Err(e) if report => Outcome::invalid(e),
            Err(_) => Outcome::none(),
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.split.is_loading() {
            return Outcome::none();
        }
        let path = match self.validated_path() {
            Ok(path) => path,
            Err(e) => return Outcome::invalid(e),
        };
        let rows_per_chunk = match parse_rows_per_chunk(self.rows.value()) {
            Ok(rows) => rows,
            Err(e) => return Outcome::invalid(e),
        };

        self.saved_to = None;
        self.save = None;
        let ticket = self.split.begin();
        Outcome::command(Action::SplitCsv {
            ticket,
            path,
            rows_per_chunk,
        })
    }

    fn save_archive(&mut self) -> Outcome {
        if self.save.is_some() {
            return Outcome::none();
        }
        let Some(archive) = self.split.ready() else {
            return Outcome::none();
        };
        let ticket = Ticket::next();
        let action = Action::SaveFile {
            ticket,
            origin: SaveOrigin::Archive,
            dir: self.download_dir.clone(),
            file_name: archive.file_name.clone(),
            bytes: Arc::clone(&archive.bytes),
        };
        self.save = Some(ticket);
        Outcome::command(action)
    }

    pub fn on_inspected(&mut self, ticket: Ticket, result: Result<u64, String>) -> Outcome {
        let path = PathBuf::from(self.path.value().trim());
        let result = result.map(|rows| Inspection { path, rows });
        if self.inspection.resolve(ticket, result).is_stale() {
            return Outcome::stale("batch");
        }
        Outcome::none()
    }

    pub fn on_split(&mut self, ticket: Ticket, result: ApiResult<SplitOutcome>) -> Outcome {
        if self
            .split
            .resolve(ticket, result.map_err(|e| e.user_message()))
            .is_stale()
        {
            return Outcome::stale("batch");
        }
        match self.split.ready() {
            Some(archive) => {
                let entries = archive
                    .entries
                    .map_or_else(|| "unknown".to_string(), |n| n.to_string());
                Outcome::info(format!(
                    "{} ready ({} bytes, {entries} files)",
                    archive.file_name,
                    archive.bytes.len()
                ))
            }
            None => Outcome::none(),
        }
    }

    pub fn on_saved(&mut self, ticket: Ticket, result: Result<PathBuf, String>) -> Outcome {
        if self.save != Some(ticket) {
            return Outcome::stale("batch");
        }
        self.save = None;
        match result {
            Ok(path) => {
                let message = format!("Saved {}", path.display());
                self.saved_to = Some(path);
                Outcome::info(message)
            }
            Err(e) => Outcome::failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::views::Notice;
    use crossterm::event::KeyModifiers;

    fn press(view: &mut BatchView, code: KeyCode) -> Outcome {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn config(dir: &Path) -> BatchConfig {
        BatchConfig {
            default_rows_per_chunk: 2,
            download_dir: dir.join("downloads"),
        }
    }

    fn archive() -> SplitOutcome {
        SplitOutcome {
            file_name: "orders_split_chunks.zip".into(),
            bytes: Arc::new(vec![1, 2, 3]),
            entries: Some(3),
        }
    }

    #[test]
    fn test_parse_rows_per_chunk_rejects_zero_and_negative() {
        assert_eq!(parse_rows_per_chunk("10").unwrap().get(), 10);
        assert!(parse_rows_per_chunk("0").is_err());
        assert!(parse_rows_per_chunk("-5").is_err());
        assert!(parse_rows_per_chunk("").is_err());
    }

    #[test]
    fn test_missing_file_blocks_split() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.focus = BatchFocus::Split;
        assert_eq!(
            press(&mut view, KeyCode::Enter).notice,
            Some(Notice::Invalid(ValidationError::MissingFile))
        );

        view.path.set_value(dir.path().join("nope.csv").display().to_string());
        assert!(matches!(
            press(&mut view, KeyCode::Enter).notice,
            Some(Notice::Invalid(ValidationError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_zero_rows_blocks_split_without_request() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("orders.csv");
        std::fs::write(&csv, "id\n1\n").unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.path.set_value(csv.display().to_string());
        view.rows.set_value("0");
        view.focus = BatchFocus::Split;

        let outcome = press(&mut view, KeyCode::Enter);
        assert!(outcome.command.is_none());
        assert_eq!(
            outcome.notice,
            Some(Notice::Invalid(ValidationError::InvalidRowsPerChunk("0".into())))
        );
        assert!(view.split.is_idle());
    }

    #[test]
    fn test_expected_chunks_after_inspection() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("orders.csv");
        std::fs::write(&csv, "id\n1\n2\n3\n4\n5\n").unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.path.set_value(csv.display().to_string());

        let Some(Action::InspectCsv { ticket, path }) = press(&mut view, KeyCode::Enter).command
        else {
            panic!("expected inspection");
        };
        assert_eq!(path, csv);
        view.on_inspected(ticket, Ok(5));
        assert_eq!(view.expected_chunks(), Some(3));
    }

    #[test]
    fn test_new_path_releases_archive() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("orders.csv");
        std::fs::write(&csv, "id\n1\n").unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.path.set_value(csv.display().to_string());
        view.focus = BatchFocus::Split;

        let Some(Action::SplitCsv { ticket, rows_per_chunk, .. }) =
            press(&mut view, KeyCode::Enter).command
        else {
            panic!("expected split");
        };
        assert_eq!(rows_per_chunk.get(), 2);
        view.on_split(ticket, Ok(archive()));
        assert!(view.split.ready().is_some());

        view.focus = BatchFocus::Path;
        press(&mut view, KeyCode::Char('x'));
        assert!(view.split.ready().is_none());
        assert!(view.split.is_idle());
    }

    #[test]
    fn test_resplit_releases_previous_archive_first() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("orders.csv");
        std::fs::write(&csv, "id\n1\n").unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.path.set_value(csv.display().to_string());
        view.focus = BatchFocus::Split;

        let Some(Action::SplitCsv { ticket, .. }) = press(&mut view, KeyCode::Enter).command else {
            panic!("expected split");
        };
        view.on_split(ticket, Ok(archive()));
        let Some(Action::SplitCsv { .. }) = press(&mut view, KeyCode::Enter).command else {
            panic!("expected split");
        };
        assert!(view.split.ready().is_none());
        assert!(view.split.is_loading());
    }

    #[test]
    fn test_save_archive_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("orders.csv");
        std::fs::write(&csv, "id\n1\n").unwrap();
        let mut view = BatchView::new(&config(dir.path()));
        view.path.set_value(csv.display().to_string());
        view.focus = BatchFocus::Split;
        let Some(Action::SplitCsv { ticket, .. }) = press(&mut view, KeyCode::Enter).command else {
            panic!("expected split");
        };
        view.on_split(ticket, Ok(archive()));

        view.focus = BatchFocus::Save;
        let Some(Action::SaveFile {
            ticket,
            dir: target,
            file_name,
            ..
        }) = press(&mut view, KeyCode::Enter).command
        else {
            panic!("expected save");
        };
        assert_eq!(target, dir.path().join("downloads"));
        assert_eq!(file_name, "orders_split_chunks.zip");

        let saved = target.join("orders_split_chunks.zip");
        view.on_saved(ticket, Ok(saved.clone()));
        assert_eq!(view.saved_to, Some(saved));
    }
}
