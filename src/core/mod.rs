pub mod conversation;
pub mod planner;
pub mod trip;

pub use conversation::{ChatMessage, MessageLog, Role};
pub use planner::Planner;
pub use trip::TripRequest;
