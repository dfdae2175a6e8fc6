use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, TripError};
use crate::models::Candidate;
use crate::planner::PlanOutcome;

/// Load candidates from a JSON array or a CSV file with a header row.
///
/// The format follows the file extension. Ratings must be 1-3 and
/// coordinates finite and in range. Duplicate ids keep the first position
/// and the last record's data.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let raw: Vec<Candidate> = match extension.as_str() {
        "json" => serde_json::from_str(&fs::read_to_string(path)?)?,
        "csv" => {
            let mut reader = csv::Reader::from_path(path)?;
            reader
                .deserialize()
                .collect::<std::result::Result<Vec<Candidate>, csv::Error>>()?
        }
        other => return Err(TripError::UnsupportedFormat(other.to_string())),
    };

    if let Some(bad) = raw.iter().find(|c| !c.has_valid_rating()) {
        return Err(TripError::InvalidRating {
            id: bad.id,
            rating: bad.rating,
        });
    }

    let bad_coordinate = raw.iter().find_map(|c| {
        c.location
            .coordinate()
            .filter(|coord| !coord.is_valid())
            .map(|coord| (c.id, coord))
    });
    if let Some((id, coord)) = bad_coordinate {
        return Err(TripError::InvalidInput(format!(
            "restaurant {} has invalid coordinates ({}, {})",
            id, coord.latitude, coord.longitude
        )));
    }

    let loaded = raw.len();
    let candidates = dedup_by_id(raw);
    debug!(
        "loaded {} candidates from {} ({} after dedup)",
        loaded,
        path.display(),
        candidates.len()
    );

    Ok(candidates)
}

fn dedup_by_id(raw: Vec<Candidate>) -> Vec<Candidate> {
    let mut positions: HashMap<u64, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::with_capacity(raw.len());

    for candidate in raw {
        match positions.get(&candidate.id) {
            Some(&idx) => candidates[idx] = candidate,
            None => {
                positions.insert(candidate.id, candidates.len());
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Save a planned itinerary as pretty-printed JSON.
pub fn save_itinerary<P: AsRef<Path>>(path: P, outcome: &PlanOutcome) -> Result<()> {
    let json = serde_json::to_string_pretty(outcome)?;
    fs::write(path, json)?;
    Ok(())
}
