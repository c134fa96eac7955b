//! Hooktail - Terminal activity feed for GitHub webhook events
//!
//! A TUI application that polls the webhook logger's API and shows
//! repository activity as it happens.
//!
//! This library provides:
//! - [`api`]: Logs endpoint client and background polling
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod keys;
pub mod model;
pub mod ui;
