//! Skycast Library
//!
//! This module exposes the application, data, and rendering modules for the
//! skycast binary and for integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod forecast;
pub mod ui;
