//! Fetch orchestration
//!
//! Runs the network sequence behind each user action (geocode a city or look
//! up the machine's position, then fetch the forecast) on a background task,
//! and reports the outcome to the UI loop over a tokio channel. Outcomes
//! carry the sequence number of the request that produced them so the app
//! can discard results that were superseded while in flight.

use chrono::{Local, Utc};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::data::{
    Coordinates, GeocodingClient, GeocodingError, LocateClient, LocateError, WeatherClient,
    WeatherError, WeatherReport,
};
use crate::forecast;

/// Display label for forecasts requested via position lookup
const MY_LOCATION_LABEL: &str = "My Location";

/// A fetch the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Geocode this city name, then fetch its forecast
    Search(String),
    /// Look up the machine's position, then fetch its forecast
    Locate,
}

/// Result of a finished fetch, tagged with its request sequence number
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number the request was issued with
    pub seq: u64,
    /// The assembled report, or the message to show instead
    pub result: Result<WeatherReport, FetchError>,
}

/// Errors surfaced to the user when a fetch fails
///
/// The `Display` strings are the exact status-line messages.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Geocoding matched nothing
    #[error("City not found. Please try another search.")]
    CityNotFound,

    /// Geocoding request or parse failed
    #[error("Failed to find city. Please check your spelling.")]
    CityLookupFailed(#[source] GeocodingError),

    /// Forecast request, parse, or series validation failed
    #[error("Failed to get weather data. Please try again later.")]
    ForecastFailed(#[source] WeatherError),

    /// Position lookup failed for any reason
    #[error("Unable to retrieve your location. Please enter a city manually.")]
    PositionFailed(#[source] LocateError),
}

/// Runs the full network sequence for a request
#[derive(Debug, Clone)]
pub struct Fetcher {
    geocoding: GeocodingClient,
    weather: WeatherClient,
    locate: LocateClient,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a Fetcher with default clients
    pub fn new() -> Self {
        Self {
            geocoding: GeocodingClient::new(),
            weather: WeatherClient::new(),
            locate: LocateClient::new(),
        }
    }

    /// Create a Fetcher with custom clients
    pub fn with_clients(
        geocoding: GeocodingClient,
        weather: WeatherClient,
        locate: LocateClient,
    ) -> Self {
        Self {
            geocoding,
            weather,
            locate,
        }
    }

    /// Run the network sequence for a request to completion
    pub async fn run(&self, request: FetchRequest) -> Result<WeatherReport, FetchError> {
        match request {
            FetchRequest::Search(query) => self.search(&query).await,
            FetchRequest::Locate => self.my_location().await,
        }
    }

    /// Geocode a city name and fetch the forecast for the first match
    async fn search(&self, query: &str) -> Result<WeatherReport, FetchError> {
        let place = self.geocoding.lookup(query).await.map_err(|err| match err {
            GeocodingError::NotFound => FetchError::CityNotFound,
            other => FetchError::CityLookupFailed(other),
        })?;

        let coords = Coordinates {
            latitude: place.latitude,
            longitude: place.longitude,
        };
        self.assemble_report(coords, place.name).await
    }

    /// Look up the machine's position and fetch the forecast for it
    async fn my_location(&self) -> Result<WeatherReport, FetchError> {
        let coords = self
            .locate
            .current_position()
            .await
            .map_err(FetchError::PositionFailed)?;

        self.assemble_report(coords, MY_LOCATION_LABEL.to_string())
            .await
    }

    /// Fetch the forecast bundle and wrap it into a displayable report
    async fn assemble_report(
        &self,
        coords: Coordinates,
        place: String,
    ) -> Result<WeatherReport, FetchError> {
        let bundle = self
            .weather
            .fetch_forecast(coords.latitude, coords.longitude)
            .await
            .map_err(FetchError::ForecastFailed)?;

        let today = Local::now().date_naive();
        let selected_day = forecast::default_selected_day(&bundle.daily, today);

        Ok(WeatherReport {
            place,
            current: bundle.current,
            daily: bundle.daily,
            hourly: bundle.hourly,
            selected_day,
            fetched_at: Utc::now(),
        })
    }
}

/// Runs a fetch on a background task, reporting the outcome on `tx`
///
/// # Arguments
/// * `fetcher` - Clients to run the sequence with
/// * `seq` - Sequence number the request was issued with
/// * `request` - What to fetch
/// * `tx` - Channel the outcome is delivered on
pub fn spawn_fetch(
    fetcher: Fetcher,
    seq: u64,
    request: FetchRequest,
    tx: mpsc::Sender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let result = fetcher.run(request).await;
        // The app may already be shutting down; a closed channel is fine
        let _ = tx.send(FetchOutcome { seq, result }).await;
    });
}

/// Checks for a finished fetch without blocking
///
/// # Arguments
/// * `receiver` - The outcome channel to check
///
/// # Returns
/// * `Some(FetchOutcome)` if a fetch has finished
/// * `None` if nothing is pending
pub fn try_recv(receiver: &mut mpsc::Receiver<FetchOutcome>) -> Option<FetchOutcome> {
    receiver.try_recv().ok()
}
