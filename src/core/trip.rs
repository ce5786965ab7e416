use serde::{Deserialize, Serialize};

use super::conversation::MessageLog;

/// Default budget tier applied when the user leaves the field empty
pub const DEFAULT_BUDGET: &str = "moderate";
/// Default trip length in days
pub const DEFAULT_DURATION_DAYS: u32 = 3;
/// Default traveler count
pub const DEFAULT_TRAVELERS: u32 = 1;
/// Placeholder used when no free-text preferences were given
pub const DEFAULT_NOTES: &str = "none";

/// All user-supplied and derived parameters for a single trip.
///
/// Created empty at the start of a session and mutated once per generate
/// action. The record is plain owned data with no ambient lifetime; callers
/// hand it to [`crate::Planner::generate`] by mutable reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city (e.g., "Paris")
    pub destination: String,
    /// Budget tier as free text ("low", "moderate", "high")
    pub budget: String,
    /// Trip length in days; zero means "use the default"
    pub duration_days: u32,
    /// Number of travelers; zero means "use the default"
    pub travelers: u32,
    /// Free-text preferences (e.g., "a mix of famous and offbeat places")
    pub notes: String,
    /// Accumulated itinerary text from the last generate action
    pub itinerary: String,
    /// Ordered role-tagged transcript of generate actions
    pub log: MessageLog,
}

impl TripRequest {
    /// Create an empty request for the given destination
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            budget: String::new(),
            duration_days: 0,
            travelers: 0,
            notes: String::new(),
            itinerary: String::new(),
            log: MessageLog::new(),
        }
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = budget.into();
        self
    }

    pub fn with_duration_days(mut self, duration_days: u32) -> Self {
        self.duration_days = duration_days;
        self
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Fill in default values for optional inputs.
    ///
    /// Pure pass over the record: empty budget becomes "moderate", a
    /// non-positive duration becomes 3 days, a non-positive traveler count
    /// becomes 1, and empty notes become "none". The destination is left
    /// untouched.
    pub fn normalized(mut self) -> Self {
        if self.budget.trim().is_empty() {
            self.budget = DEFAULT_BUDGET.to_string();
        }
        if self.duration_days == 0 {
            self.duration_days = DEFAULT_DURATION_DAYS;
        }
        if self.travelers == 0 {
            self.travelers = DEFAULT_TRAVELERS;
        }
        if self.notes.trim().is_empty() {
            self.notes = DEFAULT_NOTES.to_string();
        }
        self
    }
}
