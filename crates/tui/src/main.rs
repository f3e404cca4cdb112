//! opsdash - terminal dashboard for the operations backend.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, metrics and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Backend request details (see `crates/client`).
//! - Configuration sources (see `crates/config`).
//! - Async API calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Configuration is loaded before the terminal is touched, so config errors
//!   print to a normal terminal.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use futures_util::StreamExt;
use opsdash_client::{MetricsCollector, MetricsExporter};
use opsdash_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use opsdash_tui::action::Action;
use opsdash_tui::app::App;
use opsdash_tui::cli::Cli;
use opsdash_tui::confirm::{AutoConfirm, ConfirmationPolicy, PopupConfirmation};
use opsdash_tui::runtime::{
    client::create_client,
    config::load_config,
    side_effects::{SharedClient, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

/// How long shutdown waits for in-flight requests.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "opsdash.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so logs are flushed

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        }
    } else {
        None
    };
    let metrics = if _metrics_exporter.is_some() {
        MetricsCollector::new()
    } else {
        MetricsCollector::disabled()
    };

    let config = load_config(&cli)?;
    let client: SharedClient = Arc::new(create_client(&config, Some(metrics.clone()))?);

    let confirmation: Box<dyn ConfirmationPolicy> = if cli.assume_yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(PopupConfirmation)
    };
    let mut app = App::with_confirmation(config, confirmation).with_metrics(metrics);

    let task_tracker = TaskTracker::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if cli.no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(!cli.no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    spawn_input_reader(&task_tracker, tx.clone());

    for action in app.startup() {
        dispatch(&mut app, action, &client, &tx, &task_tracker).await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(a) => a,
                        None => continue,
                    },
                    other => other,
                };
                if !dispatch(&mut app, action, &client, &tx, &task_tracker).await {
                    break;
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    tracing::info!("Shutting down");
    let _ = task_tracker.close();
    drop(rx);
    if tokio::time::timeout(SHUTDOWN_GRACE, task_tracker.wait())
        .await
        .is_err()
    {
        tracing::warn!(
            pending = task_tracker.len(),
            "Abandoning requests still in flight at shutdown"
        );
    }

    drop(_terminal_guard);
    terminal.show_cursor()?;

    Ok(())
}

/// Apply an action and every follow-up it produces, running side effects for
/// the commands among them. Returns `false` once `Quit` is reached.
async fn dispatch(
    app: &mut App,
    action: Action,
    client: &SharedClient,
    tx: &Sender<Action>,
    task_tracker: &TaskTracker,
) -> bool {
    let mut next = Some(action);
    while let Some(action) = next {
        if matches!(action, Action::Quit) {
            return false;
        }
        next = app.update(action.clone());
        handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone()).await;
    }
    true
}

/// Forward terminal events into the action channel.
///
/// Keys and resizes are never dropped; mouse events are dropped when the
/// channel is full.
fn spawn_input_reader(task_tracker: &TaskTracker, tx: Sender<Action>) {
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let event = match event_result {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!("Error reading terminal event: {}", e);
                    continue;
                }
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if tx.send(Action::Input(key)).await.is_err() {
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    if tx.send(Action::Resize(width, height)).await.is_err() {
                        break;
                    }
                }
                Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                },
                _ => {}
            }
        }
    });
}
