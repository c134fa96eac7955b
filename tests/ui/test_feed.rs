//! Rendering tests for Feed View

use ratatui::{Terminal, backend::TestBackend};

use hooktail::model::{ActionKind, LogEntry, Notification};
use hooktail::ui::views::FeedView;

use crate::buffer_text;

/// Helper: create a LogEntry with common defaults
fn make_entry(
    author: &str,
    action: ActionKind,
    from_branch: Option<&str>,
    to_branch: &str,
    timestamp: &str,
) -> LogEntry {
    LogEntry {
        request_id: Some(format!("{author}-{timestamp}")),
        author: author.to_string(),
        action,
        from_branch: from_branch.map(String::from),
        to_branch: to_branch.to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn render(view: &mut FeedView, notification: Option<&Notification>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), notification))
        .unwrap();
    buffer_text(terminal.backend())
}

#[test]
fn test_loading_placeholder() {
    let mut view = FeedView::new();

    let text = render(&mut view, None);

    assert!(text.contains("Hooktail - Activity Feed"));
    assert!(text.contains("Loading activity..."));
}

#[test]
fn test_error_placeholder_on_first_failure() {
    let mut view = FeedView::new();
    view.mark_failed();

    let text = render(&mut view, None);

    assert!(text.contains("Failed to load activity data"));
    assert!(text.contains("Check your connection and try again"));
}

#[test]
fn test_empty_state_after_empty_batch() {
    let mut view = FeedView::new();
    view.set_entries(Vec::new());

    let text = render(&mut view, None);

    assert!(text.contains("No activity yet"));
    assert!(text.contains("Waiting for webhook events to arrive"));
}

#[test]
fn test_push_row() {
    let mut view = FeedView::new();
    view.set_entries(vec![make_entry(
        "alice",
        ActionKind::Push,
        Some("main"),
        "main",
        "2024-01-15T14:30:00Z",
    )]);

    let text = render(&mut view, None);

    assert!(text.contains('↑'));
    assert!(text.contains("alice pushed to main"));
    assert!(text.contains("January 15, 2024 at 02:30 PM UTC"));
}

#[test]
fn test_pull_request_and_merge_rows() {
    let mut view = FeedView::new();
    view.set_entries(vec![
        make_entry(
            "alice",
            ActionKind::PullRequest,
            Some("feature/login"),
            "main",
            "2024-01-15T14:30:00Z",
        ),
        make_entry(
            "unknown",
            ActionKind::Merge,
            Some("feature/login"),
            "main",
            "2024-01-15T15:00:00Z",
        ),
    ]);

    let text = render(&mut view, None);

    assert!(text.contains("alice submitted a pull request from feature/login to main"));
    assert!(text.contains("unknown merged branch feature/login to main"));
    assert!(text.contains('↻'));
    assert!(text.contains('⇄'));
}

#[test]
fn test_unknown_action_row() {
    let mut view = FeedView::new();
    view.set_entries(vec![make_entry(
        "bob",
        ActionKind::Other("RELEASE".to_string()),
        None,
        "main",
        "2024-01-15T14:30:00Z",
    )]);

    let text = render(&mut view, None);

    assert!(text.contains("bob performed RELEASE on main"));
    assert!(text.contains('•'));
}

#[test]
fn test_rows_ordered_newest_first() {
    let mut view = FeedView::new();
    view.set_entries(vec![
        make_entry(
            "older",
            ActionKind::Push,
            Some("main"),
            "main",
            "2024-01-14T10:00:00Z",
        ),
        make_entry(
            "newer",
            ActionKind::Push,
            Some("main"),
            "main",
            "2024-01-15T10:00:00Z",
        ),
    ]);

    let text = render(&mut view, None);

    let newer_at = text.find("newer pushed").expect("newer row missing");
    let older_at = text.find("older pushed").expect("older row missing");
    assert!(newer_at < older_at, "newest entry must render first");
}

#[test]
fn test_unparseable_timestamp_shown_raw() {
    let mut view = FeedView::new();
    view.set_entries(vec![make_entry(
        "alice",
        ActionKind::Push,
        Some("main"),
        "main",
        "yesterday-ish",
    )]);

    let text = render(&mut view, None);

    assert!(text.contains("yesterday-ish"));
}

#[test]
fn test_control_characters_are_neutralized() {
    let mut view = FeedView::new();
    view.set_entries(vec![make_entry(
        "ali\u{1b}[31mce",
        ActionKind::Push,
        Some("main"),
        "ma\u{7}in",
        "2024-01-15T14:30:00Z",
    )]);

    let text = render(&mut view, None);

    assert!(!text.contains('\u{1b}'));
    assert!(!text.contains('\u{7}'));
    // The printable remainder still shows.
    assert!(text.contains("ali[31mce pushed to main"));
}

#[test]
fn test_rows_survive_failure_after_success() {
    let mut view = FeedView::new();
    view.set_entries(vec![make_entry(
        "alice",
        ActionKind::Push,
        Some("main"),
        "main",
        "2024-01-15T14:30:00Z",
    )]);
    view.mark_failed();

    let text = render(&mut view, None);

    assert!(text.contains("alice pushed to main"));
    assert!(!text.contains("Failed to load activity data"));
}

#[test]
fn test_notification_in_title_bar() {
    let mut view = FeedView::new();
    view.set_entries(Vec::new());
    let notification = Notification::info("Refreshing feed");

    let text = render(&mut view, Some(&notification));

    assert!(text.contains("Info:"));
    assert!(text.contains("Refreshing feed"));
}

#[test]
fn test_long_feed_scrolls_to_selection() {
    let mut view = FeedView::new();
    let entries: Vec<LogEntry> = (0..60)
        .map(|i| {
            make_entry(
                &format!("author{i:02}"),
                ActionKind::Push,
                Some("main"),
                "main",
                // Counting down keeps author00 the newest after sorting.
                &format!("2024-01-15T14:{:02}:00Z", 59 - i),
            )
        })
        .collect();
    view.set_entries(entries);
    view.move_to_bottom();

    let text = render(&mut view, None);

    assert!(
        text.contains("author59 pushed"),
        "selected (oldest) row must be scrolled into view"
    );
    assert!(
        !text.contains("author00 pushed"),
        "newest row should have scrolled off screen"
    );
}
