//! Terminal User Interface module
//!
//! This module provides the full-screen calculator wizard using ratatui.
//! Each input step is shown as a card with a numeric input; the deficit
//! step adds a row of preset buttons.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
