use crate::{Planner, TripRequest};
use clap::{Arg, Command};
use dotenvy;
use std::env;
use tracing::{error, info};

/// CLI entry point for the trip-planner tool
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version("0.1.0")
        .about("Generate a personalized trip itinerary with current weather")
        .arg(
            Arg::new("destination")
                .help("Destination city (e.g., Paris)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("TIER")
                .help("Budget tier: low, moderate, or high")
                .default_value("moderate"),
        )
        .arg(
            Arg::new("duration")
                .short('d')
                .long("duration")
                .value_name("DAYS")
                .help("Trip length in days")
                .default_value("3"),
        )
        .arg(
            Arg::new("travelers")
                .short('n')
                .long("travelers")
                .value_name("COUNT")
                .help("Number of travelers")
                .default_value("1"),
        )
        .arg(
            Arg::new("notes")
                .long("notes")
                .value_name("TEXT")
                .help("Additional preferences (e.g., 'a mix of famous and offbeat places')"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The completion model to use")
                .default_value("llama-3.3-70b-versatile"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Completion API key (or set GROQ_API_KEY / OPENAI_API_KEY env vars)"),
        )
        .arg(
            Arg::new("weather-key")
                .short('w')
                .long("weather-key")
                .value_name("KEY")
                .help("WeatherAPI.com key (or set WEATHER_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Completion API base URL (or set OPENAI_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Completion request timeout in seconds")
                .default_value("120"),
        )
        .get_matches();

    // Get API keys from arguments or environment
    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GROQ_API_KEY").ok())
        .or_else(|| env::var("OPENAI_API_KEY").ok())
        .ok_or("Completion API key is required. Set GROQ_API_KEY environment variable or use --api-key")?;

    let weather_key = matches
        .get_one::<String>("weather-key")
        .cloned()
        .or_else(|| env::var("WEATHER_API_KEY").ok())
        .ok_or("Weather API key is required. Set WEATHER_API_KEY environment variable or use --weather-key")?;

    let duration: u32 = matches.get_one::<String>("duration").unwrap().parse()?;
    let travelers: u32 = matches.get_one::<String>("travelers").unwrap().parse()?;
    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;

    let mut planner = Planner::new(api_key, weather_key)
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_timeout(std::time::Duration::from_secs(timeout_seconds));

    if let Some(base_url) = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("OPENAI_BASE_URL").ok())
    {
        planner = planner.with_completion_base_url(base_url);
    }

    let destination = matches.get_one::<String>("destination").unwrap();
    let mut trip = TripRequest::new(destination.as_str())
        .with_budget(matches.get_one::<String>("budget").unwrap().as_str())
        .with_duration_days(duration)
        .with_travelers(travelers)
        .with_notes(matches.get_one::<String>("notes").map(String::as_str).unwrap_or(""));

    info!("Planning trip to {}", destination);
    info!(
        "Using model: {}",
        matches.get_one::<String>("model").unwrap()
    );

    match planner.generate(&mut trip).await {
        Ok(itinerary) => {
            println!("\nYour Personalized Itinerary:\n{}", itinerary);
            info!("Itinerary generation completed successfully");
        }
        Err(e) => {
            error!("Itinerary generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
