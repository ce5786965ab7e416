use serde_json::Value;

use crate::core::conversation::ChatMessage;
use crate::core::trip::TripRequest;

/// The single human turn sent with every itinerary request
pub const ITINERARY_REQUEST: &str = "Create a detailed itinerary for my trip.";

/// Build the fixed two-message itinerary prompt for a normalized trip.
///
/// System instructions carry the interpolated trip fields; the human turn is
/// always the same one-liner. Callers normalize the trip first so the
/// template never sees empty optional fields.
pub fn itinerary_messages(trip: &TripRequest) -> Vec<Value> {
    let system = format!(
        "You are a helpful travel assistant. Using the provided information, generate:\n\
         1. Top-rated attractions and activities at the destination.\n\
         2. Suggestions aligned with user preferences (e.g., 'Hidden Gems').\n\
         3. A well-structured itinerary with timing and grouping of activities for each day.\n\
         4. A detailed budget breakdown for the trip, including accommodation, food, transportation, and activities.\n\n\
         Use the following inputs (some might be missing):\n\
         City: {}, Budget: {}, Duration: {} days, Additional Input: {}, Number of Travelers: {}.",
        trip.destination, trip.budget, trip.duration_days, trip.notes, trip.travelers
    );

    vec![
        ChatMessage::system(system).to_message(),
        ChatMessage::human(ITINERARY_REQUEST).to_message(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_messages_embed_trip_fields() {
        let trip = TripRequest::new("Paris")
            .with_budget("high")
            .with_duration_days(5)
            .with_travelers(2)
            .with_notes("hidden gems")
            .normalized();

        let messages = itinerary_messages(&trip);
        assert_eq!(messages.len(), 2);

        let system = messages[0]["content"].as_str().unwrap();
        assert!(system.contains("City: Paris"));
        assert!(system.contains("Budget: high"));
        assert!(system.contains("Duration: 5 days"));
        assert!(system.contains("Additional Input: hidden gems"));
        assert!(system.contains("Number of Travelers: 2"));

        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], ITINERARY_REQUEST);
    }
}
