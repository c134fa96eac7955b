//! Reusable UI widgets

mod help_panel;
mod status_bar;
mod status_line;

pub use help_panel::render_help_panel;
pub use status_bar::{render_status_bar, status_bar_height};
pub use status_line::render_status_line;
