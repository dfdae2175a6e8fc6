use chrono::NaiveDate;

use crate::error::{Result, TripError};
use crate::models::Coordinate;
use crate::planner::constants::{MAX_BUDGET, MIN_BUDGET};

/// Validated trip parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub start_date: NaiveDate,
    /// Last day of the trip, inclusive.
    pub end_date: NaiveDate,
    /// Cap on the sum of rating tiers per day. `None` means unbounded.
    pub budget: Option<u32>,
    /// Explicit routing anchor. Defaults to the pool centroid.
    pub start: Option<Coordinate>,
}

impl TripRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, budget: Option<u32>) -> Result<Self> {
        if end_date < start_date {
            return Err(TripError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        if let Some(b) = budget {
            if !(MIN_BUDGET..=MAX_BUDGET).contains(&b) {
                return Err(TripError::InvalidBudget(b));
            }
        }

        Ok(Self {
            start_date,
            end_date,
            budget,
            start: None,
        })
    }

    pub fn with_start(mut self, start: Coordinate) -> Self {
        self.start = Some(start);
        self
    }

    /// Number of days between start and end, inclusive.
    pub fn day_count(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(span).unwrap_or(u32::MAX)
    }
}
