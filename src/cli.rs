//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap. A city name may
//! be given as positional words; without one the app looks up the machine's
//! own position instead.

use clap::Parser;

/// Skycast - Current conditions, five-day forecast, and hourly weather
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Terminal weather lookup with a five-day forecast")]
#[command(version)]
pub struct Cli {
    /// City to look up on startup; multiple words are joined
    ///
    /// Examples:
    ///   skycast              # Weather for your current location
    ///   skycast paris        # Weather for Paris
    ///   skycast new york     # Weather for New York
    #[arg(value_name = "CITY")]
    pub city: Vec<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// City to search immediately; `None` starts with a position lookup
    pub initial_query: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// Positional words become one space-joined query, so quoting
    /// multi-word city names is optional.
    pub fn from_cli(cli: &Cli) -> Self {
        let joined = cli.city.join(" ");
        if joined.trim().is_empty() {
            StartupConfig {
                initial_query: None,
            }
        } else {
            StartupConfig {
                initial_query: Some(joined),
            }
        }
    }
}
