//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct
//! - `monitor`: polling lifecycle
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod monitor;
mod render;
mod state;

pub use state::App;
