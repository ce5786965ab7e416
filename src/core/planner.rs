use std::time::Duration;

use tracing::info;

use crate::{
    core::conversation::ChatMessage,
    core::trip::TripRequest,
    error::{PlannerError, Result},
    services::completion::{extract_content, ChatCompletionRequest, CompletionClient},
    services::prompt::{itinerary_messages, ITINERARY_REQUEST},
    services::weather::WeatherClient,
};

/// Orchestrates one generate action: normalize, fetch weather, ask the model.
#[derive(Debug)]
pub struct Planner {
    weather: WeatherClient,
    completion: CompletionClient,
    model: String,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl Planner {
    pub fn new(completion_api_key: String, weather_api_key: String) -> Self {
        Self {
            weather: WeatherClient::new(weather_api_key),
            completion: CompletionClient::new(completion_api_key),
            model: "llama-3.3-70b-versatile".to_string(),
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_completion_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.completion.set_base_url(base_url);
        self
    }

    pub fn with_weather_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.weather = self.weather.with_base_url(base_url);
        self
    }

    /// Build a planner from `GROQ_API_KEY` (or `OPENAI_API_KEY`) and
    /// `WEATHER_API_KEY`, honoring `OPENAI_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        let completion_api_key = std::env::var("GROQ_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| {
                PlannerError::Config(
                    "GROQ_API_KEY or OPENAI_API_KEY environment variable must be set".to_string(),
                )
            })?;
        let weather_api_key = std::env::var("WEATHER_API_KEY").map_err(|_| {
            PlannerError::Config("WEATHER_API_KEY environment variable must be set".to_string())
        })?;

        let mut planner = Self::new(completion_api_key, weather_api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            planner.completion.set_base_url(base_url);
        }
        Ok(planner)
    }

    /// Generate an itinerary for the trip.
    ///
    /// The trip is normalized in place, current weather is fetched, and the
    /// model is asked for an itinerary with the fixed two-message prompt at
    /// temperature 0. The two outbound calls run strictly in sequence. The
    /// returned text is the weather line, a blank line, then the model text;
    /// it is also stored on `trip.itinerary` and appended to `trip.log`.
    pub async fn generate(&self, trip: &mut TripRequest) -> Result<String> {
        *trip = std::mem::take(trip).normalized();

        info!(target: "planner", destination = %trip.destination, "fetching weather");
        let weather_line = self.weather.current_summary(&trip.destination).await?;

        info!(target: "planner", model = %self.model, "requesting itinerary");
        let body = ChatCompletionRequest::new(self.model.clone(), itinerary_messages(trip))
            .with_max_tokens(self.max_tokens)
            .into_value();
        let response = self.completion.chat_completion(&body, self.timeout).await?;
        let model_text = extract_content(&response)?;

        let itinerary = format!("{}\n\n{}", weather_line, model_text);

        trip.itinerary = itinerary.clone();
        trip.log.push(ChatMessage::human(ITINERARY_REQUEST));
        trip.log.push(ChatMessage::assistant(itinerary.clone()));

        Ok(itinerary)
    }
}
