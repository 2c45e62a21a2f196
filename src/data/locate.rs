//! IP-based position lookup
//!
//! Approximates the machine's coordinates from its public IP address via
//! ipapi.co (free, no API key required). Accuracy is city-level.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Coordinates;

/// Base URL for the ipapi.co position lookup
const LOCATE_BASE_URL: &str = "https://ipapi.co/json/";

/// Errors that can occur when looking up the machine's position
#[derive(Debug, Error)]
pub enum LocateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for the ipapi.co position lookup
#[derive(Debug, Clone)]
pub struct LocateClient {
    client: Client,
    base_url: String,
}

impl Default for LocateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LocateClient {
    /// Create a new LocateClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: LOCATE_BASE_URL.to_string(),
        }
    }

    /// Create a new LocateClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: LOCATE_BASE_URL.to_string(),
        }
    }

    /// Point the client at a custom endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Look up the machine's approximate coordinates
    ///
    /// # Returns
    /// * `Ok(Coordinates)` - The position derived from the public IP
    /// * `Err(LocateError)` - If the request or parsing fails; rate-limit
    ///   responses carry no coordinates and surface as a parse failure
    pub async fn current_position(&self) -> Result<Coordinates, LocateError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let location: IpLocation = serde_json::from_str(&text)?;

        Ok(Coordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }
}

/// Position fields of the ipapi.co response
#[derive(Debug, Deserialize)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
}
