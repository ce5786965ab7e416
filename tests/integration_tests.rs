use mockito::Matcher;
use serde_json::json;
use trip_planner_rs::{Planner, PlannerError, TripRequest, WeatherClient};

fn weather_body() -> &'static str {
    r#"{"current":{"temp_c":20.0,"condition":{"text":"Sunny"}}}"#
}

fn completion_body(content: &str) -> String {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_weather_summary_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/current.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "test-key".into()),
            Matcher::UrlEncoded("q".into(), "Paris".into()),
            Matcher::UrlEncoded("aqi".into(), "no".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(weather_body())
        .create_async()
        .await;

    let client = WeatherClient::new("test-key").with_base_url(server.url());
    let summary = client.current_summary("Paris").await.unwrap();

    assert!(summary.contains("Paris"));
    assert!(summary.contains("20"));
    assert!(summary.contains("Sunny"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_weather_summary_falls_back_on_404() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/current.json")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":{"code":1006,"message":"No matching location found."}}"#)
        .create_async()
        .await;

    let client = WeatherClient::new("test-key").with_base_url(server.url());
    let summary = client.current_summary("Atlantis").await.unwrap();

    assert!(summary.contains("Atlantis"));
    assert!(summary.contains("Could not fetch weather data"));
}

#[tokio::test]
async fn test_weather_summary_malformed_body_is_recoverable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/current.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"location":{"name":"Paris"}}"#)
        .create_async()
        .await;

    let client = WeatherClient::new("test-key").with_base_url(server.url());
    let result = client.current_summary("Paris").await;

    match result {
        Err(PlannerError::WeatherDecode(message)) => {
            assert!(message.contains("current"));
        }
        other => panic!("expected WeatherDecode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_completion_api_error_is_recoverable() {
    let mut weather = mockito::Server::new_async().await;
    let _weather_mock = weather
        .mock("GET", "/current.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(weather_body())
        .create_async()
        .await;

    let mut completion = mockito::Server::new_async().await;
    let _completion_mock = completion
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let planner = Planner::new("bad-key".to_string(), "test-key".to_string())
        .with_weather_base_url(weather.url())
        .with_completion_base_url(completion.url());

    let mut trip = TripRequest::new("Paris");
    let result = planner.generate(&mut trip).await;

    match result {
        Err(PlannerError::Completion { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API Key"));
        }
        other => panic!("expected Completion error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_end_to_end() {
    let mut weather = mockito::Server::new_async().await;
    let weather_mock = weather
        .mock("GET", "/current.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Paris".into()),
            Matcher::UrlEncoded("aqi".into(), "no".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(weather_body())
        .expect(1)
        .create_async()
        .await;

    let mut completion = mockito::Server::new_async().await;
    let completion_mock = completion
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer completion-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.0
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Day 1: Visit the Louvre."))
        .expect(1)
        .create_async()
        .await;

    let planner = Planner::new("completion-key".to_string(), "weather-key".to_string())
        .with_weather_base_url(weather.url())
        .with_completion_base_url(completion.url());

    // All optional fields left unset, as an empty form submission would
    let mut trip = TripRequest::new("Paris");
    let itinerary = planner.generate(&mut trip).await.unwrap();

    // Optional fields were defaulted before the prompt was built
    assert_eq!(trip.budget, "moderate");
    assert_eq!(trip.duration_days, 3);
    assert_eq!(trip.travelers, 1);
    assert_eq!(trip.notes, "none");

    // Weather line, blank line, then model text
    let (weather_line, model_text) = itinerary.split_once("\n\n").unwrap();
    assert!(weather_line.contains("Weather in Paris"));
    assert!(weather_line.contains("20"));
    assert!(weather_line.contains("Sunny"));
    assert_eq!(model_text, "Day 1: Visit the Louvre.");

    // Result is stored on the trip and appended to the log
    assert_eq!(trip.itinerary, itinerary);
    assert_eq!(trip.log.len(), 2);
    assert_eq!(trip.log.last().unwrap().content, itinerary);

    weather_mock.assert_async().await;
    completion_mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_uses_fallback_weather_line() {
    let mut weather = mockito::Server::new_async().await;
    let _weather_mock = weather
        .mock("GET", "/current.json")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":{"code":1006,"message":"No matching location found."}}"#)
        .create_async()
        .await;

    let mut completion = mockito::Server::new_async().await;
    let _completion_mock = completion
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Day 1: Explore."))
        .create_async()
        .await;

    let planner = Planner::new("completion-key".to_string(), "weather-key".to_string())
        .with_weather_base_url(weather.url())
        .with_completion_base_url(completion.url());

    let mut trip = TripRequest::new("Nowhereville");
    let itinerary = planner.generate(&mut trip).await.unwrap();

    assert!(itinerary.starts_with("⚠️ Could not fetch weather data for Nowhereville"));
    assert!(itinerary.ends_with("Day 1: Explore."));
}

#[test]
fn test_error_handling() {
    let error = PlannerError::WeatherDecode("missing field `current`".to_string());
    assert_eq!(error.error_code(), "WEATHER_DECODE_ERROR");
    assert!(error.to_string().contains("missing field `current`"));

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "WEATHER_DECODE_ERROR");

    let completion = PlannerError::Completion {
        status: 429,
        message: "quota exceeded".to_string(),
    };
    assert_eq!(completion.error_code(), "COMPLETION_ERROR");
    assert!(completion.to_string().contains("429"));
}
