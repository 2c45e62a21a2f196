//! UI rendering module for Skycast
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod dashboard;
pub mod help_overlay;

pub use dashboard::render_dashboard;
pub use help_overlay::render as render_help_overlay;
