use serde::{Deserialize, Serialize};

use crate::planner::constants::{MAX_RATING, MIN_RATING, TOP_TIER};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite, with latitude within ±90 and longitude within ±180.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Where a restaurant sits, if known.
///
/// Only `Located` candidates take part in distance-based routing; `Unlocated`
/// ones are scheduled by pool order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    Located(Coordinate),
    Unlocated,
}

impl Location {
    /// Build a location from optional parts. Both must be present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Location::Located(Coordinate::new(lat, lon)),
            _ => Location::Unlocated,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Location::Located(coord) => Some(*coord),
            Location::Unlocated => None,
        }
    }

    pub fn is_located(&self) -> bool {
        matches!(self, Location::Located(_))
    }
}

/// A restaurant eligible for a trip itinerary.
///
/// Rating is the award tier, 1 to 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CandidateRecord", into = "CandidateRecord")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub rating: u8,
    pub location: Location,
    pub wishlist: bool,
    pub visited: bool,
    pub city: String,
    pub country: String,
    pub cuisine: String,
}

impl Candidate {
    pub fn new(id: u64, name: impl Into<String>, rating: u8) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            location: Location::Unlocated,
            wishlist: false,
            visited: false,
            city: String::new(),
            country: String::new(),
            cuisine: String::new(),
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Location::Located(Coordinate::new(latitude, longitude));
        self
    }

    pub fn wishlisted(mut self) -> Self {
        self.wishlist = true;
        self
    }

    pub fn already_visited(mut self) -> Self {
        self.visited = true;
        self
    }

    pub fn in_city(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = city.into();
        self.country = country.into();
        self
    }

    pub fn serving(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    #[inline]
    pub fn is_top_tier(&self) -> bool {
        self.rating == TOP_TIER
    }

    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }

    /// One-line description for logs.
    pub fn debug_string(&self) -> String {
        let place = match self.location {
            Location::Located(c) => format!("({:.4}, {:.4})", c.latitude, c.longitude),
            Location::Unlocated => "(no coordinates)".to_string(),
        };
        format!(
            "#{} {} [{}★] {}{}",
            self.id,
            self.name,
            self.rating,
            place,
            if self.wishlist { " wishlist" } else { "" }
        )
    }
}

/// Flat on-disk shape of a candidate, shared by the JSON and CSV loaders.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CandidateRecord {
    id: u64,
    name: String,
    rating: u8,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    wishlist: bool,
    #[serde(default)]
    visited: bool,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    cuisine: String,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            rating: record.rating,
            location: Location::from_parts(record.latitude, record.longitude),
            wishlist: record.wishlist,
            visited: record.visited,
            city: record.city,
            country: record.country,
            cuisine: record.cuisine,
        }
    }
}

impl From<Candidate> for CandidateRecord {
    fn from(candidate: Candidate) -> Self {
        let coord = candidate.location.coordinate();
        Self {
            id: candidate.id,
            name: candidate.name,
            rating: candidate.rating,
            latitude: coord.map(|c| c.latitude),
            longitude: coord.map(|c| c.longitude),
            wishlist: candidate.wishlist,
            visited: candidate.visited,
            city: candidate.city,
            country: candidate.country,
            cuisine: candidate.cuisine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_requires_both_parts() {
        assert!(Location::from_parts(Some(48.8), Some(2.3)).is_located());
        assert_eq!(Location::from_parts(Some(48.8), None), Location::Unlocated);
        assert_eq!(Location::from_parts(None, Some(2.3)), Location::Unlocated);
        assert_eq!(Location::from_parts(None, None).coordinate(), None);
    }

    #[test]
    fn test_deserialize_without_coordinates() {
        let json = r#"{"id": 7, "name": "Le Petit", "rating": 1}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.id, 7);
        assert_eq!(candidate.location, Location::Unlocated);
        assert!(!candidate.wishlist);
        assert!(!candidate.visited);
        assert!(candidate.city.is_empty());
    }

    #[test]
    fn test_serialize_flattens_location() {
        let candidate = Candidate::new(1, "Arpège", 3).at(48.8556, 2.3166).wishlisted();
        let value = serde_json::to_value(&candidate).unwrap();

        assert_eq!(value["latitude"], 48.8556);
        assert_eq!(value["longitude"], 2.3166);
        assert_eq!(value["wishlist"], true);
    }

    #[test]
    fn test_rating_validity() {
        assert!(Candidate::new(1, "A", 1).has_valid_rating());
        assert!(Candidate::new(1, "A", 3).has_valid_rating());
        assert!(!Candidate::new(1, "A", 0).has_valid_rating());
        assert!(!Candidate::new(1, "A", 4).has_valid_rating());
        assert!(Candidate::new(1, "A", 3).is_top_tier());
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(48.86, 2.35).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 2.35).is_valid());
        assert!(!Coordinate::new(48.86, f64::INFINITY).is_valid());
        assert!(!Coordinate::new(91.0, 2.35).is_valid());
        assert!(!Coordinate::new(48.86, -180.5).is_valid());
    }
}
