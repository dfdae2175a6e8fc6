pub mod assemble;
pub mod constants;
pub mod geo;
pub mod packing;
pub mod ranking;
pub mod request;
pub mod route;

use log::{debug, warn};
use serde::{Serialize, Serializer};

use crate::models::{Candidate, Itinerary};

pub use assemble::{assemble_itinerary, date_for_day};
pub use constants::*;
pub use geo::{centroid, haversine_km};
pub use packing::{PackedDays, Refusal, check_slot, pack_days};
pub use ranking::{compare_priority, prioritize};
pub use request::TripRequest;
pub use route::{Route, sequence_route};

/// Result of one planning run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutcome<'a> {
    pub itinerary: Itinerary<'a>,

    #[serde(skip)]
    pub route: Route<'a>,

    /// Candidates the packer could not fit before the trip ran out of days.
    #[serde(serialize_with = "serialize_ids")]
    pub unplaced: Vec<&'a Candidate>,
}

fn serialize_ids<S: Serializer>(candidates: &[&Candidate], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(candidates.iter().map(|c| c.id))
}

/// Plan a trip: prioritize, route, pack into days, then date the days.
///
/// Never fails. An empty pool or a budget nothing fits yields an empty
/// itinerary; callers decide whether that is acceptable.
pub fn plan_trip<'a>(candidates: &'a [Candidate], request: &TripRequest) -> PlanOutcome<'a> {
    let seed = prioritize(candidates);

    if !seed.is_empty() && seed.iter().all(|c| !c.location.is_located()) {
        warn!("no candidate has coordinates; routing falls back to priority order");
    }

    let route = sequence_route(&seed, request.start);
    debug!(
        "route over {} candidates, {:.2} km",
        route.len(),
        route.total_distance_km()
    );

    let packed = pack_days(&route, request.day_count(), request.budget);
    if !packed.unplaced.is_empty() {
        warn!(
            "{} candidate(s) could not be scheduled within {} day(s)",
            packed.unplaced.len(),
            request.day_count()
        );
    }

    let itinerary = assemble_itinerary(packed.days, request.start_date);
    debug!(
        "itinerary: {} day(s), {} meal(s)",
        itinerary.len(),
        itinerary.meal_count()
    );

    PlanOutcome {
        itinerary,
        route,
        unplaced: packed.unplaced,
    }
}
