//! Terminal typing tutor. The `engine` module holds the typing logic: line
//! wrapping, exercise state and the keystroke matcher. Everything else renders
//! that state with ratatui and feeds it key events.

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod logging;
pub mod ui;
