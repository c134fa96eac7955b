//! Rendering tests for the full application frame

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use hooktail::api::{DemoFeed, FeedSource};
use hooktail::app::App;

use crate::buffer_text;

fn demo_app() -> App {
    App::new(FeedSource::Demo(DemoFeed::new()), Duration::from_secs(900))
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    buffer_text(terminal.backend())
}

#[test]
fn test_initial_frame() {
    let mut app = demo_app();

    let text = render(&mut app);

    assert!(text.contains("Starting..."));
    assert!(text.contains("Loading activity..."));
    assert!(!text.contains("Last updated:"));
}

#[test]
fn test_connected_frame_shows_feed_and_status() {
    let mut app = demo_app();
    app.start();
    app.on_tick();

    let text = render(&mut app);

    assert!(text.contains("Connected"));
    assert!(text.contains("Last updated:"));
    assert!(text.contains("pushed to"));
}

#[test]
fn test_status_bar_shows_key_hints() {
    let mut app = demo_app();

    let text = render(&mut app);

    assert!(text.contains("[q] Quit"));
    assert!(text.contains("[?] Help"));
    assert!(text.contains("[Space] Pause"));
    assert!(text.contains("[r] Refresh"));
}

#[test]
fn test_paused_frame() {
    let mut app = demo_app();
    app.start();
    app.on_tick();

    app.on_key_event(KeyEvent::from(KeyCode::Char(' ')));
    let text = render(&mut app);

    assert!(text.contains("[paused]"));
    assert!(text.contains("[Space] Resume"));
    assert!(text.contains("Polling paused"));
}

#[test]
fn test_help_overlay_renders_on_top() {
    let mut app = demo_app();

    app.on_key_event(KeyEvent::from(KeyCode::Char('?')));
    let text = render(&mut app);

    assert!(text.contains("Key bindings:"));
    assert!(text.contains("Pause/resume polling"));
    assert!(text.contains("Hooktail - Help"));
}

#[test]
fn test_refresh_notification_appears_in_title() {
    let mut app = demo_app();
    app.start();
    app.on_tick();

    app.on_key_event(KeyEvent::from(KeyCode::Char('r')));
    let text = render(&mut app);

    assert!(text.contains("Refreshing feed"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = demo_app();
    app.start();
    app.on_tick();

    for (width, height) in [(20, 6), (10, 3), (5, 1)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
