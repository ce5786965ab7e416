use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Current-conditions payload returned by WeatherAPI.com
#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
    condition: ConditionInfo,
}

#[derive(Debug, Deserialize)]
struct ConditionInfo {
    text: String,
}

/// Client for the WeatherAPI.com current-conditions endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl WeatherClient {
    /// Create a new client using the provided API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Build the client using the `WEATHER_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("WEATHER_API_KEY")
            .map_err(|_| PlannerError::Config("Missing WEATHER_API_KEY env var".to_string()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current weather for a destination and format a one-line summary.
    ///
    /// A non-success status is not an error: the caller gets a fixed warning
    /// line naming the destination, so a mistyped city degrades the itinerary
    /// instead of aborting it. Transport failures and undecodable 200 bodies
    /// are recoverable errors.
    pub async fn current_summary(&self, destination: &str) -> Result<String> {
        let url = format!("{}/current.json", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", destination),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|err| {
                PlannerError::WeatherRequest(format!("Failed to call weather API: {}", err))
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(target: "planner::weather", %status, destination, "weather lookup failed, using fallback");
            return Ok(fallback_summary(destination));
        }

        let body = response.text().await.map_err(|err| {
            PlannerError::WeatherRequest(format!("Failed to read weather response: {}", err))
        })?;

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        let decoded: WeatherApiResponse = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|err| {
                let path = err.path().to_string();
                let location = if path.is_empty() {
                    "<root>".to_string()
                } else {
                    path
                };
                PlannerError::WeatherDecode(format!("at {}: {}", location, err))
            })?;

        Ok(format!(
            "🌤️ Weather in {}: {}°C, {}",
            destination, decoded.current.temp_c, decoded.current.condition.text
        ))
    }
}

/// Warning line used when the weather endpoint returns a non-success status
pub fn fallback_summary(destination: &str) -> String {
    format!(
        "⚠️ Could not fetch weather data for {}. Please check the city name and try again.",
        destination
    )
}
