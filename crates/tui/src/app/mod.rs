//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (CurrentScreen, HealthState)
//! - `views`: Per-tab state machines
//! - `input`: Global key routing and the text input component
//! - `mouse`: Mouse event handling
//! - `popups`: Popup input handling
//! - `actions`: Action handling (`App::update`)
//! - `render`: Rendering logic

pub mod state;
pub mod views;

mod actions;
pub mod input;
mod mouse;
mod popups;
mod render;

pub use state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT, HealthState};

use opsdash_client::MetricsCollector;
use opsdash_config::Config;

use crate::action::Action;
use crate::confirm::{ConfirmationPolicy, PopupConfirmation};
use crate::ui::{Popup, StatusMessage, Theme};
use views::{BatchView, BrowserView, DeviceView, LabelsView, LogsView, PersonView, ToolsView};

/// Main application state.
pub struct App {
    config: Config,
    confirmation: Box<dyn ConfirmationPolicy>,
    metrics: Option<MetricsCollector>,

    pub current_screen: CurrentScreen,
    pub person: PersonView,
    pub device: DeviceView,
    pub logs: LogsView,
    pub browser: BrowserView,
    pub batch: BatchView,
    pub labels: LabelsView,
    pub tools: ToolsView,

    pub popup: Option<Popup>,
    pub status: Option<StatusMessage>,
    pub health: HealthState,
    pub spinner_frame: u8,
    pub theme: Theme,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("current_screen", &self.current_screen)
            .field("confirmation", &self.confirmation)
            .field("popup", &self.popup)
            .field("status", &self.status)
            .field("health", &self.health)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the app with interactive confirmation popups.
    pub fn new(config: Config) -> Self {
        Self::with_confirmation(config, Box::new(PopupConfirmation))
    }

    pub fn with_confirmation(config: Config, confirmation: Box<dyn ConfirmationPolicy>) -> Self {
        Self {
            person: PersonView::new(),
            device: DeviceView::new(),
            logs: LogsView::new(&config.search),
            browser: BrowserView::new(&config.browse, config.batch.download_dir.clone()),
            batch: BatchView::new(&config.batch),
            labels: LabelsView::new(),
            tools: ToolsView::new(),
            config,
            confirmation,
            metrics: None,
            current_screen: CurrentScreen::default(),
            popup: None,
            status: None,
            health: HealthState::Checking,
            spinner_frame: 0,
            theme: Theme::default(),
        }
    }

    /// Count dropped stale results through `metrics`.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.config.connection.base_url
    }

    /// Actions to run once at startup.
    pub fn startup(&self) -> Vec<Action> {
        vec![Action::CheckHealth]
    }

    /// Whether the active view is editing text, so printable keys belong to it.
    pub fn captures_text(&self) -> bool {
        match self.current_screen {
            CurrentScreen::Person => self.person.captures_text(),
            CurrentScreen::Device => self.device.captures_text(),
            CurrentScreen::Logs => self.logs.captures_text(),
            CurrentScreen::S3 => self.browser.captures_text(),
            CurrentScreen::CsvSplit => self.batch.captures_text(),
            CurrentScreen::Labels | CurrentScreen::Tools => false,
        }
    }

    /// Whether the active view is waiting on a request.
    pub fn is_busy(&self) -> bool {
        match self.current_screen {
            CurrentScreen::Person => self.person.lookup.is_loading() || self.person.is_saving(),
            CurrentScreen::Device => self.device.lookup.is_loading() || self.device.shadow.is_saving(),
            CurrentScreen::Logs => {
                self.logs.profiles.is_loading()
                    || self.logs.handlers.is_loading()
                    || self.logs.results.is_loading()
            }
            CurrentScreen::S3 => {
                self.browser.listing.is_loading()
                    || self.browser.preview.is_loading()
                    || self.browser.is_saving()
            }
            CurrentScreen::CsvSplit => {
                self.batch.inspection.is_loading() || self.batch.split.is_loading()
            }
            CurrentScreen::Labels => self.labels.output.is_loading(),
            CurrentScreen::Tools => self.tools.report.is_loading(),
        }
    }

    /// Leave the current tab (resetting it) and enter `screen`.
    ///
    /// Returns the entry command of the new tab, if it has one.
    fn switch_to(&mut self, screen: CurrentScreen) -> Option<Action> {
        if screen == self.current_screen {
            return None;
        }
        self.reset_view(self.current_screen);
        tracing::debug!(from = ?self.current_screen, to = ?screen, "Switching screen");
        self.current_screen = screen;

        let outcome = match screen {
            CurrentScreen::Logs => self.logs.enter(),
            CurrentScreen::Labels => self.labels.enter(),
            _ => return None,
        };
        self.apply_outcome(outcome)
    }

    /// Replace a view with a fresh one; its in-flight results become stale.
    fn reset_view(&mut self, screen: CurrentScreen) {
        match screen {
            CurrentScreen::Person => self.person = PersonView::new(),
            CurrentScreen::Device => self.device = DeviceView::new(),
            CurrentScreen::Logs => self.logs = LogsView::new(&self.config.search),
            CurrentScreen::S3 => {
                self.browser =
                    BrowserView::new(&self.config.browse, self.config.batch.download_dir.clone())
            }
            CurrentScreen::CsvSplit => self.batch = BatchView::new(&self.config.batch),
            CurrentScreen::Labels => self.labels = LabelsView::new(),
            CurrentScreen::Tools => self.tools = ToolsView::new(),
        }
    }
}
