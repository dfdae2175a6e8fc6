use crate::models::{Candidate, Coordinate, Location};
use crate::planner::constants::EARTH_RADIUS_KM;

/// Great-circle distance in kilometres between two points in degrees.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Mean coordinate of all located candidates.
///
/// Returns `(0, 0)` when no candidate has coordinates; callers should treat
/// that as "no meaningful anchor".
pub fn centroid<'a, I>(candidates: I) -> Coordinate
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let (sum_lat, sum_lon, count) = candidates
        .into_iter()
        .filter_map(|c| match c.location {
            Location::Located(coord) => Some(coord),
            Location::Unlocated => None,
        })
        .fold((0.0, 0.0, 0usize), |(lat, lon, n), coord| {
            (lat + coord.latitude, lon + coord.longitude, n + 1)
        });

    if count == 0 {
        return Coordinate::new(0.0, 0.0);
    }

    Coordinate::new(sum_lat / count as f64, sum_lon / count as f64)
}
