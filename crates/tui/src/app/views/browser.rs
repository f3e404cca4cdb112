//! S3 bucket browser.
//!
//! Responsibilities:
//! - Keep the `(bucket, prefix)` cursor and the listing for it.
//! - Navigate into folders, jump to ancestor breadcrumbs, and fetch a
//!   preview for files with a configured extension.
//! - Offer the decoded preview for saving.
//!
//! Invariants:
//! - The root breadcrumb is the empty prefix, never `/`.
//! - A failed listing shows no entries (the stale listing is not kept).
//! - Moving to another prefix clears the preview.

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::{S3Entry, S3Object};
use opsdash_config::BrowseConfig;

use crate::action::{Action, ApiResult, SaveOrigin};
use crate::app::input::SingleLineInput;
use crate::app::views::Outcome;
use crate::resource::{RemoteResource, Ticket};

/// Non-empty segments of a prefix, outermost first.
pub fn breadcrumbs(prefix: &str) -> Vec<&str> {
    prefix.split('/').filter(|s| !s.is_empty()).collect()
}

/// Prefix for breadcrumb `index`: 0 is the root, `i` keeps the first `i` segments.
pub fn breadcrumb_prefix(prefix: &str, index: usize) -> String {
    if index == 0 {
        return String::new();
    }
    let segments = breadcrumbs(prefix);
    let keep = index.min(segments.len());
    if keep == 0 {
        return String::new();
    }
    let mut out = segments[..keep].join("/");
    out.push('/');
    out
}

/// Width and height from a PNG header, if `bytes` is a PNG.
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    const SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
    if bytes.len() < 24 || !bytes.starts_with(SIGNATURE) || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// A decoded object ready to show or save.
#[derive(Debug, Clone)]
pub struct Preview {
    pub key: String,
    pub size: u64,
    pub last_modified: String,
    pub media_type: String,
    pub bytes: Arc<Vec<u8>>,
    pub dimensions: Option<(u32, u32)>,
}

impl Preview {
    fn decode(object: S3Object) -> Result<Self, String> {
        let decoded = object
            .decode_content()
            .map_err(|e| format!("Could not decode {}: {e}", object.key))?;
        Ok(Self {
            dimensions: png_dimensions(&decoded.bytes),
            key: object.key,
            size: object.size,
            last_modified: object.last_modified,
            media_type: decoded.media_type,
            bytes: Arc::new(decoded.bytes),
        })
    }

    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserFocus {
    #[default]
    Bucket,
    Breadcrumbs,
    Entries,
}

#[derive(Debug)]
pub struct BrowserView {
    config: BrowseConfig,
    download_dir: PathBuf,
    pub bucket_input: SingleLineInput,
    pub focus: BrowserFocus,
    pub bucket: Option<String>,
    pub prefix: String,
    pub listing: RemoteResource<Vec<S3Entry>>,
    pub selected: usize,
    /// Highlighted breadcrumb; 0 is the root.
    pub crumb: usize,
    pub preview: RemoteResource<Preview>,
    save: Option<Ticket>,
}

impl BrowserView {
    pub fn new(config: &BrowseConfig, download_dir: PathBuf) -> Self {
        Self {
            bucket_input: SingleLineInput::with_placeholder(config.default_bucket.clone()),
            config: config.clone(),
            download_dir,
            focus: BrowserFocus::Bucket,
            bucket: None,
            prefix: String::new(),
            listing: RemoteResource::new(),
            selected: 0,
            crumb: 0,
            preview: RemoteResource::new(),
            save: None,
        }
    }

    pub fn captures_text(&self) -> bool {
        self.focus == BrowserFocus::Bucket
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_some()
    }

    pub fn selected_entry(&self) -> Option<&S3Entry> {
        self.listing.ready()?.get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        match self.focus {
            BrowserFocus::Bucket => match key.code {
                KeyCode::Enter => self.connect(),
                KeyCode::Down => {
                    self.focus = BrowserFocus::Breadcrumbs;
                    Outcome::none()
                }
                KeyCode::Up => Outcome::none(),
                _ => {
                    self.bucket_input.handle_key(key);
                    Outcome::none()
                }
            },
            BrowserFocus::Breadcrumbs => match key.code {
                KeyCode::Up => {
                    self.focus = BrowserFocus::Bucket;
                    Outcome::none()
                }
                KeyCode::Down => {
                    self.focus = BrowserFocus::Entries;
                    Outcome::none()
                }
                KeyCode::Left => {
                    self.crumb = self.crumb.saturating_sub(1);
                    Outcome::none()
                }
                KeyCode::Right => {
                    self.crumb = (self.crumb + 1).min(breadcrumbs(&self.prefix).len());
                    Outcome::none()
                }
                KeyCode::Enter => self.jump_to_crumb(self.crumb),
                KeyCode::Char('s') => self.save_preview(),
                _ => Outcome::none(),
            },
            BrowserFocus::Entries => match key.code {
                KeyCode::Up if self.selected == 0 => {
                    self.focus = BrowserFocus::Breadcrumbs;
                    Outcome::none()
                }
                KeyCode::Up => {
                    self.selected -= 1;
                    Outcome::none()
                }
                KeyCode::Down => {
                    let len = self.listing.ready().map_or(0, Vec::len);
                    if self.selected + 1 < len {
                        self.selected += 1;
                    }
                    Outcome::none()
                }
                KeyCode::Enter => self.open_selected(),
                KeyCode::Backspace => {
                    let depth = breadcrumbs(&self.prefix).len();
                    if depth == 0 {
                        Outcome::none()
                    } else {
                        self.jump_to_crumb(depth - 1)
                    }
                }
                KeyCode::Char('s') => self.save_preview(),
                _ => Outcome::none(),
            },
        }
    }

    /// Connect to the typed bucket (or the default) at the root.
    pub fn connect(&mut self) -> Outcome {
        let typed = self.bucket_input.value().trim();
        let bucket = if typed.is_empty() {
            self.config.default_bucket.clone()
        } else {
            typed.to_string()
        };
        self.bucket = Some(bucket);
        self.navigate(String::new())
    }

    fn navigate(&mut self, prefix: String) -> Outcome {
        let Some(bucket) = self.bucket.clone() else {
            return Outcome::none();
        };
        self.prefix = prefix.clone();
        self.crumb = breadcrumbs(&self.prefix).len();
        self.selected = 0;
        self.preview.reset();
        self.save = None;
        let ticket = self.listing.begin();
        Outcome::command(Action::ListObjects {
            ticket,
            bucket,
            prefix,
        })
    }

    /// Jump to the ancestor at breadcrumb `index`.
    pub fn jump_to_crumb(&mut self, index: usize) -> Outcome {
        let prefix = breadcrumb_prefix(&self.prefix, index);
        self.navigate(prefix)
    }

    fn open_selected(&mut self) -> Outcome {
        let Some(entry) = self.selected_entry().cloned() else {
            return Outcome::none();
        };
        if entry.is_folder() {
            return self.navigate(entry.key);
        }
        if !self.config.is_previewable(&entry.key) {
            return Outcome::info(format!("No preview for {}", entry.name));
        }
        let Some(bucket) = self.bucket.clone() else {
            return Outcome::none();
        };
        self.save = None;
        let ticket = self.preview.begin();
        Outcome::command(Action::FetchObject {
            ticket,
            bucket,
            key: entry.key,
        })
    }

    fn save_preview(&mut self) -> Outcome {
        let Some(preview) = self.preview.ready() else {
            return Outcome::none();
        };
        let ticket = Ticket::next();
        let action = Action::SaveFile {
            ticket,
            origin: SaveOrigin::Preview,
            dir: self.download_dir.clone(),
            file_name: preview.file_name().to_string(),
            bytes: Arc::clone(&preview.bytes),
        };
        self.save = Some(ticket);
        Outcome::command(action)
    }

    pub fn on_listing(&mut self, ticket: Ticket, result: ApiResult<Vec<S3Entry>>) -> Outcome {
        if self
            .listing
            .resolve(ticket, result.map_err(|e| e.user_message()))
            .is_stale()
        {
            return Outcome::stale("s3");
        }
        self.selected = 0;
        if self.listing.ready().is_some() && self.focus == BrowserFocus::Bucket {
            self.focus = BrowserFocus::Entries;
        }
        Outcome::none()
    }

    pub fn on_object(&mut self, ticket: Ticket, result: ApiResult<S3Object>) -> Outcome {
        let result = result
            .map_err(|e| e.user_message())
            .and_then(Preview::decode);
        if self.preview.resolve(ticket, result).is_stale() {
            return Outcome::stale("s3");
        }
        Outcome::none()
    }

    pub fn on_saved(&mut self, ticket: Ticket, result: Result<PathBuf, String>) -> Outcome {
        if self.save != Some(ticket) {
            return Outcome::stale("s3");
        }
        self.save = None;
        match result {
            Ok(path) => Outcome::info(format!("Saved {}", path.display())),
            Err(e) => Outcome::failure(e),
        }
    }
}
