//! App state machine tests: keys in, commands and state out.

mod common;

use std::sync::Arc;

use common::*;
use crossterm::event::KeyCode;
use opsdash_client::PersonLookup;
use opsdash_config::Config;
use opsdash_tui::app::views::person::PersonFocus;
use opsdash_tui::confirm::AutoConfirm;
use opsdash_tui::ui::PopupType;
use opsdash_tui::{App, CurrentScreen, StatusLevel};

/// Feed one action through `update` and every follow-up, collecting commands.
fn drive(app: &mut App, action: Action) -> Vec<Action> {
    let mut commands = Vec::new();
    let mut next = Some(action);
    while let Some(action) = next {
        if action.is_command() {
            commands.push(action.clone());
        }
        next = app.update(action);
    }
    commands
}

/// Route a key the way the main loop does.
fn press(app: &mut App, code: KeyCode) -> Vec<Action> {
    match app.handle_input(key(code)) {
        Some(action) => drive(app, action),
        None => Vec::new(),
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn person_fixture() -> PersonLookup {
    serde_json::from_value(load_fixture("person/full.json")).unwrap()
}

/// Look up a person and deliver the fixture as the answer.
fn looked_up(mut app: App) -> App {
    type_text(&mut app, "p-1");
    let commands = press(&mut app, KeyCode::Enter);
    let ticket = match &commands[..] {
        [Action::LookupPerson { ticket, person_id }] => {
            assert_eq!(person_id, "p-1");
            *ticket
        }
        other => panic!("expected one lookup, got {other:?}"),
    };
    drive(
        &mut app,
        Action::PersonLoaded {
            ticket,
            result: Ok(person_fixture()),
        },
    );
    assert_eq!(app.person.enabled, Some(true));
    app
}

#[test]
fn test_quit_keys() {
    let app = App::new(Config::default());
    assert!(matches!(app.handle_input(ctrl('c')), Some(Action::Quit)));
    // `q` is text while the person ID field has focus.
    assert!(matches!(
        app.handle_input(key(KeyCode::Char('q'))),
        Some(Action::Input(_))
    ));
}

#[test]
fn test_startup_probes_health() {
    let app = App::new(Config::default());
    assert!(matches!(app.startup()[..], [Action::CheckHealth]));
}

#[test]
fn test_declined_toggle_sends_nothing() {
    let mut app = looked_up(App::with_confirmation(
        Config::default(),
        Box::new(AutoConfirm(false)),
    ));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.person.focus, PersonFocus::Toggle);
    let commands = press(&mut app, KeyCode::Enter);

    assert!(commands.is_empty());
    assert_eq!(app.person.enabled, Some(true));
    assert!(app.popup.is_none());
}

#[test]
fn test_approved_toggle_is_optimistic() {
    let mut app = looked_up(App::with_confirmation(
        Config::default(),
        Box::new(AutoConfirm(true)),
    ));

    press(&mut app, KeyCode::Down);
    let commands = press(&mut app, KeyCode::Enter);

    assert!(matches!(
        &commands[..],
        [Action::SetPersonEnabled { enabled: false, .. }]
    ));
    assert_eq!(app.person.enabled, Some(false));
}

#[test]
fn test_failed_toggle_reverts() {
    let mut app = looked_up(App::with_confirmation(
        Config::default(),
        Box::new(AutoConfirm(true)),
    ));
    press(&mut app, KeyCode::Down);
    let ticket = match &press(&mut app, KeyCode::Enter)[..] {
        [Action::SetPersonEnabled { ticket, .. }] => *ticket,
        other => panic!("expected a write, got {other:?}"),
    };

    drive(
        &mut app,
        Action::PersonEnabledSet {
            ticket,
            result: Err(Arc::new(opsdash_client::ClientError::Remote {
                status: 502,
                url: "http://localhost/api/set_person_enabled_status".into(),
                message: "upstream down".into(),
            })),
        },
    );

    assert_eq!(app.person.enabled, Some(true));
    assert_eq!(app.status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
}

#[test]
fn test_popup_confirmation_flow() {
    let mut app = looked_up(App::new(Config::default()));
    press(&mut app, KeyCode::Down);

    let commands = press(&mut app, KeyCode::Enter);
    assert!(commands.is_empty());
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::Confirm(_))
    ));

    // Tab is swallowed by the popup.
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_screen, CurrentScreen::Person);

    let commands = press(&mut app, KeyCode::Char('y'));
    assert!(app.popup.is_none());
    assert!(matches!(
        &commands[..],
        [Action::SetPersonEnabled { enabled: false, .. }]
    ));
}

#[test]
fn test_navigation_drops_stale_result() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "p-1");
    let ticket = match &press(&mut app, KeyCode::Enter)[..] {
        [Action::LookupPerson { ticket, .. }] => *ticket,
        other => panic!("expected one lookup, got {other:?}"),
    };

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_screen, CurrentScreen::Device);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.current_screen, CurrentScreen::Person);

    drive(
        &mut app,
        Action::PersonLoaded {
            ticket,
            result: Ok(person_fixture()),
        },
    );

    assert!(app.person.lookup.is_idle());
    assert!(app.person.input.is_empty());
    assert_eq!(app.person.enabled, None);
}

#[test]
fn test_switching_to_logs_loads_profiles() {
    let mut app = App::new(Config::default());
    let commands = drive(&mut app, Action::SwitchTo(CurrentScreen::Logs));
    assert!(matches!(&commands[..], [Action::LoadProfiles { .. }]));
}

#[test]
fn test_zero_rows_per_chunk_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("orders.csv");
    std::fs::write(&csv, "id\n1\n").unwrap();

    let mut app = App::new(Config::default());
    drive(&mut app, Action::SwitchTo(CurrentScreen::CsvSplit));
    app.batch.path.set_value(csv.display().to_string());
    app.batch.rows.set_value("0");
    app.batch.focus = opsdash_tui::app::views::batch::BatchFocus::Split;

    let commands = press(&mut app, KeyCode::Enter);

    assert!(commands.is_empty());
    assert_eq!(
        app.status.as_ref().map(|s| s.level),
        Some(StatusLevel::Warning)
    );
}

#[test]
fn test_health_failure_marks_unreachable() {
    let mut app = App::new(Config::default());
    drive(
        &mut app,
        Action::HealthChecked(Err(Arc::new(opsdash_client::ClientError::Transport {
            url: "http://localhost:8080/health".into(),
            message: "connection refused".into(),
        }))),
    );
    assert_eq!(app.health, opsdash_tui::app::HealthState::Unreachable);
}
