use trip_planner_rs::{Planner, TripRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::try_init().ok();

    let planner = Planner::from_env()?;

    let mut trip = TripRequest::new("Paris")
        .with_budget("moderate")
        .with_duration_days(3)
        .with_travelers(2)
        .with_notes("a mix of famous and offbeat places");

    println!("=== Trip Planner ===\n");
    println!(
        "Destination: {} ({} days, {} travelers)\n",
        trip.destination, trip.duration_days, trip.travelers
    );

    let itinerary = planner.generate(&mut trip).await?;
    println!("{}", itinerary);

    println!("\n--- Session Log ---");
    for message in trip.log.messages() {
        let first_line = message.content.lines().next().unwrap_or("");
        println!("{:?}: {}", message.role, first_line);
    }

    Ok(())
}
