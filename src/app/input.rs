//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent};

use super::state::App;
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Handle Ctrl+C globally
        if keys::is_quit_key(&key) {
            self.quit();
            return;
        }

        // The help overlay captures all keys while open
        if self.show_help {
            self.handle_help_key(key.code);
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh_now();
            return;
        }

        match key.code {
            keys::QUIT => self.quit(),
            keys::HELP => self.open_help(),
            keys::REFRESH => self.refresh_now(),
            keys::PAUSE => self.toggle_paused(),
            keys::GO_TOP => self.feed_view.move_to_top(),
            keys::GO_BOTTOM => self.feed_view.move_to_bottom(),
            code if keys::is_move_up(code) => self.feed_view.move_up(),
            code if keys::is_move_down(code) => self.feed_view.move_down(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        match code {
            keys::ESC | keys::QUIT | keys::HELP => self.close_help(),
            keys::GO_TOP => self.help_scroll = 0,
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn open_help(&mut self) {
        self.show_help = true;
        self.help_scroll = 0;
    }

    fn close_help(&mut self) {
        self.show_help = false;
    }
}
