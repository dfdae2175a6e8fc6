#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;
pub mod sweep;

pub use error::{Result, TripError};
pub use models::{Candidate, Coordinate, DayPlan, Itinerary, Location, MealAssignment, MealSlot};
pub use planner::{PlanOutcome, TripRequest, plan_trip};
