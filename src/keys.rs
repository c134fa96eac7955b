//! Keybinding definitions for Hooktail
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit)
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application (or close the help overlay)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help overlay
pub const HELP: KeyCode = KeyCode::Char('?');

/// Close the help overlay
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Feed keys
// =============================================================================

/// Poll the endpoint now instead of waiting for the next tick
pub const REFRESH: KeyCode = KeyCode::Char('r');

/// Pause/resume the polling schedule
pub const PAUSE: KeyCode = KeyCode::Char(' ');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Close help",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Refresh",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "↓/↑",
        description: "Move down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
];

/// Feed key bindings for help display
pub const FEED_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "r",
        description: "Refresh now",
    },
    KeyBindEntry {
        key: "Space",
        description: "Pause/resume polling",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_NAV: KeyHint = KeyHint {
    key: "j/k",
    label: "Move",
    color: Color::Blue,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "r",
    label: "Refresh",
    color: Color::Green,
};
pub const HINT_PAUSE: KeyHint = KeyHint {
    key: "Space",
    label: "Pause",
    color: Color::Yellow,
};
pub const HINT_RESUME: KeyHint = KeyHint {
    key: "Space",
    label: "Resume",
    color: Color::Yellow,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

/// Feed view status bar hints
pub const FEED_VIEW_HINTS: &[KeyHint] = &[
    HINT_HELP,
    HINT_NAV,
    HINT_REFRESH,
    HINT_PAUSE,
    HINT_QUIT,
];

/// Feed view status bar hints while polling is paused
pub const FEED_VIEW_PAUSED_HINTS: &[KeyHint] = &[
    HINT_HELP,
    HINT_NAV,
    HINT_REFRESH,
    HINT_RESUME,
    HINT_QUIT,
];

/// Hints for the current pause state
pub fn feed_hints(paused: bool) -> &'static [KeyHint] {
    if paused {
        FEED_VIEW_PAUSED_HINTS
    } else {
        FEED_VIEW_HINTS
    }
}
