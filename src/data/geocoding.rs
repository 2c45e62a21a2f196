//! Open-Meteo geocoding API client
//!
//! Resolves a free-text city name to coordinates and a display name. Only
//! the first candidate is requested; choosing between homonyms is left to
//! the user rewording the query.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Place;

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Errors that can occur when resolving a city name
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The query matched no location
    #[error("no location matched the query")]
    NotFound,
}

/// Client for the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodingClient {
    /// Create a new GeocodingClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Create a new GeocodingClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Point the client at a custom endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve a city name to the first matching location
    ///
    /// # Arguments
    /// * `name` - Free-text city name
    ///
    /// # Returns
    /// * `Ok(Place)` - The best match for the query
    /// * `Err(GeocodingError::NotFound)` - The query matched nothing
    /// * `Err(_)` - If the request or parsing fails
    pub async fn lookup(&self, name: &str) -> Result<Place, GeocodingError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let api_response: GeocodingResponse = serde_json::from_str(&text)?;

        // The results key is absent entirely when nothing matched
        let record = api_response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(GeocodingError::NotFound)?;

        Ok(Place {
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
        })
    }
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingRecord>>,
}

/// One candidate location from the geocoding API
#[derive(Debug, Deserialize)]
struct GeocodingRecord {
    name: String,
    latitude: f64,
    longitude: f64,
}
