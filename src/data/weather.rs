//! Open-Meteo forecast API client
//!
//! This module provides functionality to fetch forecast data from the
//! Open-Meteo API and parse it into our forecast data structures. The API
//! delivers the hourly and daily series as parallel arrays; they are
//! validated and converted to per-point records here, so the rest of the
//! application never deals with index alignment.

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{CurrentConditions, DailyEntry, ForecastBundle, HourlyEntry};

/// Base URL for the Open-Meteo forecast API
const FORECAST_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Client for fetching forecast data from the Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: FORECAST_BASE_URL.to_string(),
        }
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: FORECAST_BASE_URL.to_string(),
        }
    }

    /// Point the client at a custom endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions plus the hourly and daily series for the
    /// given coordinates, in a single round trip
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(ForecastBundle)` - Current, hourly, and daily data together
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastBundle, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m,weathercode&daily=temperature_2m_max,temperature_2m_min,weathercode&timezone=auto",
            self.base_url, lat, lon
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let api_response: OpenMeteoResponse = serde_json::from_str(&text)?;

        self.parse_response(api_response)
    }

    /// Parse the Open-Meteo API response into a ForecastBundle
    fn parse_response(&self, response: OpenMeteoResponse) -> Result<ForecastBundle, WeatherError> {
        let current = CurrentConditions {
            temperature: response.current_weather.temperature,
            wind_speed: response.current_weather.windspeed,
            weather_code: response.current_weather.weathercode,
        };

        let daily = self.parse_daily_data(&response.daily)?;
        let hourly = self.parse_hourly_data(&response.hourly)?;

        Ok(ForecastBundle {
            current,
            daily,
            hourly,
        })
    }

    /// Parse daily weather data arrays into DailyEntry records
    fn parse_daily_data(&self, daily: &DailyData) -> Result<Vec<DailyEntry>, WeatherError> {
        let len = daily.time.len();

        // Validate that all arrays have the same length
        if daily.temperature_2m_min.len() != len
            || daily.temperature_2m_max.len() != len
            || daily.weathercode.len() != len
        {
            return Err(WeatherError::MissingField(
                "daily arrays have inconsistent lengths".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(len);

        for i in 0..len {
            let date = parse_date(&daily.time[i])?;
            entries.push(DailyEntry {
                date,
                temp_min: daily.temperature_2m_min[i],
                temp_max: daily.temperature_2m_max[i],
                weather_code: daily.weathercode[i],
            });
        }

        Ok(entries)
    }

    /// Parse hourly weather data arrays into HourlyEntry records
    fn parse_hourly_data(&self, hourly: &HourlyData) -> Result<Vec<HourlyEntry>, WeatherError> {
        let len = hourly.time.len();

        // Validate that all arrays have the same length
        if hourly.temperature_2m.len() != len || hourly.weathercode.len() != len {
            return Err(WeatherError::MissingField(
                "hourly arrays have inconsistent lengths".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(len);

        for i in 0..len {
            let time = parse_datetime(&hourly.time[i])?;
            entries.push(HourlyEntry {
                time,
                temperature: hourly.temperature_2m[i],
                weather_code: hourly.weathercode[i],
            });
        }

        Ok(entries)
    }
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-07-15T05:30") to NaiveDateTime
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| WeatherError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Parse a date string in ISO 8601 format (e.g., "2024-07-15") to NaiveDate
fn parse_date(date_str: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| WeatherError::InvalidTimeFormat(date_str.to_string()))
}

/// Open-Meteo API response structure
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current_weather: CurrentWeatherData,
    hourly: HourlyData,
    daily: DailyData,
}

/// Current weather block from Open-Meteo
#[derive(Debug, Deserialize)]
struct CurrentWeatherData {
    temperature: f64,
    windspeed: f64,
    weathercode: u8,
}

/// Hourly series arrays from Open-Meteo
#[derive(Debug, Deserialize)]
struct HourlyData {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weathercode: Vec<u8>,
}

/// Daily series arrays from Open-Meteo
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Vec<String>,
    temperature_2m_min: Vec<f64>,
    temperature_2m_max: Vec<f64>,
    weathercode: Vec<u8>,
}
