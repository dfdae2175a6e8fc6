use log::trace;

use crate::models::{Candidate, Coordinate, Location};
use crate::planner::geo::{centroid, haversine_km};

/// Visiting order produced by the greedy sequencer. Holds no duplicates.
#[derive(Debug, Clone, Default)]
pub struct Route<'a> {
    stops: Vec<&'a Candidate>,
}

impl<'a> Route<'a> {
    pub fn stops(&self) -> &[&'a Candidate] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.stops.iter().map(|c| c.id).collect()
    }

    /// Straight-line length of the route across its located stops.
    pub fn total_distance_km(&self) -> f64 {
        let located: Vec<Coordinate> = self
            .stops
            .iter()
            .filter_map(|c| c.location.coordinate())
            .collect();
        located
            .windows(2)
            .map(|pair| haversine_km(pair[0], pair[1]))
            .sum()
    }
}

/// Order the prioritized pool by repeatedly hopping to the nearest remaining
/// located candidate.
///
/// Routing starts at `start`, or at the centroid of the pool when none is
/// given. When nothing located remains, the first remaining candidate in
/// pool order is taken and the position stays where it was. Exact distance
/// ties go to the earlier pool entry.
pub fn sequence_route<'a>(pool: &[&'a Candidate], start: Option<Coordinate>) -> Route<'a> {
    let mut position = start.unwrap_or_else(|| centroid(pool.iter().copied()));
    let mut taken = vec![false; pool.len()];
    let mut stops = Vec::with_capacity(pool.len());

    while stops.len() < pool.len() {
        let pick = nearest_remaining(pool, &taken, position)
            .or_else(|| taken.iter().position(|&t| !t));

        let Some(idx) = pick else {
            break;
        };

        taken[idx] = true;
        let candidate = pool[idx];
        trace!("route stop {}: {}", stops.len() + 1, candidate.debug_string());

        if let Location::Located(coord) = candidate.location {
            position = coord;
        }
        stops.push(candidate);
    }

    Route { stops }
}

/// Index of the closest untaken located candidate, if any.
fn nearest_remaining(pool: &[&Candidate], taken: &[bool], position: Coordinate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in pool.iter().enumerate() {
        if taken[idx] {
            continue;
        }
        let Location::Located(coord) = candidate.location else {
            continue;
        };

        let dist = haversine_km(position, coord);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pool: &[Candidate]) -> Vec<&Candidate> {
        pool.iter().collect()
    }

    #[test]
    fn test_walks_a_line_from_explicit_start() {
        let pool = vec![
            Candidate::new(3, "Far", 1).at(0.0, 3.0),
            Candidate::new(1, "Near", 1).at(0.0, 1.0),
            Candidate::new(2, "Mid", 1).at(0.0, 2.0),
        ];
        let route = sequence_route(&refs(&pool), Some(Coordinate::new(0.0, 0.0)));
        assert_eq!(route.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_defaults_to_centroid() {
        // Centroid sits at (0, 2), right on top of the middle stop.
        let pool = vec![
            Candidate::new(1, "West", 1).at(0.0, 0.0),
            Candidate::new(2, "Centre", 1).at(0.0, 2.0),
            Candidate::new(3, "East", 1).at(0.0, 4.0),
        ];
        let route = sequence_route(&refs(&pool), None);
        assert_eq!(route.ids()[0], 2);
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn test_unlocated_fall_back_to_pool_order() {
        let pool = vec![
            Candidate::new(4, "D", 1),
            Candidate::new(2, "B", 1),
            Candidate::new(9, "I", 1),
        ];
        let route = sequence_route(&refs(&pool), None);
        assert_eq!(route.ids(), vec![4, 2, 9]);
    }

    #[test]
    fn test_unlocated_wait_until_located_are_exhausted() {
        let pool = vec![
            Candidate::new(1, "Nowhere", 3),
            Candidate::new(2, "Here", 1).at(10.0, 10.0),
            Candidate::new(3, "Also nowhere", 2),
            Candidate::new(4, "There", 1).at(10.0, 10.5),
        ];
        let route = sequence_route(&refs(&pool), Some(Coordinate::new(10.0, 10.0)));
        assert_eq!(route.ids(), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_distance_tie_prefers_pool_order() {
        let pool = vec![
            Candidate::new(1, "North", 1).at(1.0, 0.0),
            Candidate::new(2, "South", 1).at(-1.0, 0.0),
        ];
        let route = sequence_route(&refs(&pool), Some(Coordinate::new(0.0, 0.0)));
        assert_eq!(route.ids(), vec![1, 2]);
    }

    #[test]
    fn test_deterministic() {
        let pool = vec![
            Candidate::new(1, "A", 3).at(48.86, 2.35),
            Candidate::new(2, "B", 2).at(48.87, 2.36),
            Candidate::new(3, "C", 1),
            Candidate::new(4, "D", 2).at(48.85, 2.30),
        ];
        let first = sequence_route(&refs(&pool), None).ids();
        for _ in 0..5 {
            assert_eq!(sequence_route(&refs(&pool), None).ids(), first);
        }
    }

    #[test]
    fn test_total_distance_skips_unlocated() {
        let pool = vec![
            Candidate::new(1, "A", 1).at(0.0, 0.0),
            Candidate::new(2, "B", 1),
            Candidate::new(3, "C", 1).at(0.0, 1.0),
        ];
        let route = sequence_route(&refs(&pool), Some(Coordinate::new(0.0, 0.0)));
        let expected = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert_float_absolute_eq!(route.total_distance_km(), expected, 1e-9);
    }

    #[test]
    fn test_empty_pool() {
        assert!(sequence_route(&[], None).is_empty());
    }
}
