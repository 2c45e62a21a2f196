//! Core data models for Skycast
//!
//! This module contains all the data types used throughout the application
//! for representing locations, current conditions, and forecast series.

pub mod geocoding;
pub mod locate;
pub mod weather;

pub use geocoding::{GeocodingClient, GeocodingError};
pub use locate::{LocateClient, LocateError};
pub use weather::{WeatherClient, WeatherError};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A point on the globe, produced by geocoding or a position lookup and
/// consumed once per forecast fetch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// A geocoded location: coordinates plus the name to display for them
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Human-readable name of the location
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

/// Weather observed at the requested coordinates right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Provider weather code
    pub weather_code: u8,
}

/// One calendar day of the daily forecast series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEntry {
    /// Calendar day this entry describes
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub temp_min: f64,
    /// Maximum temperature in Celsius
    pub temp_max: f64,
    /// Provider weather code
    pub weather_code: u8,
}

/// One hour of the hourly forecast series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyEntry {
    /// Hour this entry describes
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Provider weather code
    pub weather_code: u8,
}

/// Everything one forecast call returns, populated together or not at all
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    /// Conditions right now
    pub current: CurrentConditions,
    /// Daily series, one entry per calendar day
    pub daily: Vec<DailyEntry>,
    /// Hourly series, one entry per hour
    pub hourly: Vec<HourlyEntry>,
}

/// A complete loaded forecast, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Name shown in the current-conditions title
    pub place: String,
    /// Conditions right now
    pub current: CurrentConditions,
    /// Daily series, one entry per calendar day
    pub daily: Vec<DailyEntry>,
    /// Hourly series, one entry per hour
    pub hourly: Vec<HourlyEntry>,
    /// Date currently drilled into for hourly detail; always a date present
    /// in `daily` when set
    pub selected_day: Option<NaiveDate>,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Sky/precipitation buckets for the provider's WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherKind {
    /// Buckets a WMO weather code into a displayable condition
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => WeatherKind::Clear,
            1 => WeatherKind::MainlyClear,
            2 => WeatherKind::PartlyCloudy,
            3 => WeatherKind::Overcast,
            45 | 48 => WeatherKind::Fog,
            51 | 53 => WeatherKind::Drizzle,
            55..=57 | 61..=67 | 80..=82 => WeatherKind::Rain,
            71..=77 | 85 | 86 => WeatherKind::Snow,
            95..=99 => WeatherKind::Thunderstorm,
            _ => WeatherKind::Unknown,
        }
    }

    /// Short human-readable description of the condition
    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear sky",
            WeatherKind::MainlyClear => "Mainly clear",
            WeatherKind::PartlyCloudy => "Partly cloudy",
            WeatherKind::Overcast => "Overcast",
            WeatherKind::Fog => "Foggy",
            WeatherKind::Drizzle => "Drizzle",
            WeatherKind::Rain => "Rain",
            WeatherKind::Snow => "Snow",
            WeatherKind::Thunderstorm => "Thunderstorm",
            WeatherKind::Unknown => "Unknown",
        }
    }
}
