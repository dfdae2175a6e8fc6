pub mod candidate;
pub mod itinerary;

pub use candidate::{Candidate, Coordinate, Location};
pub use itinerary::{DayPlan, Itinerary, MealAssignment, MealSlot};
