//! trip-planner-rs: a small trip planner combining live weather with
//! LLM-generated itineraries
//!
//! This library collects trip parameters, fetches current weather for the
//! destination, asks an OpenAI-compatible completion endpoint for a detailed
//! itinerary, and returns the weather summary followed by the model's text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{Planner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = Planner::from_env()?;
//!
//!     let mut trip = TripRequest::new("Paris")
//!         .with_duration_days(3)
//!         .with_notes("a mix of famous and offbeat places");
//!
//!     let itinerary = planner.generate(&mut trip).await?;
//!     println!("{}", itinerary);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub(crate) mod services;

pub use self::core::{ChatMessage, MessageLog, Planner, Role, TripRequest};
pub use error::{PlannerError, Result};
pub use services::completion::{extract_content, ChatCompletionRequest, CompletionClient};
pub use services::prompt::{itinerary_messages, ITINERARY_REQUEST};
pub use services::weather::{fallback_summary, WeatherClient};

#[cfg(feature = "cli")]
pub mod cli;
