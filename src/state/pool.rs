use std::collections::BTreeMap;

use crate::models::Candidate;

/// Case-insensitive restaurant filters used to narrow a pool to one trip.
#[derive(Debug, Clone, Default)]
pub struct PoolFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub cuisine: Option<String>,
    /// Drop restaurants the user has already visited.
    pub skip_visited: bool,
}

impl PoolFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        field_matches(&self.city, &candidate.city)
            && field_matches(&self.country, &candidate.country)
            && field_matches(&self.cuisine, &candidate.cuisine)
            && !(self.skip_visited && candidate.visited)
    }
}

fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    match wanted {
        Some(w) => w.trim().eq_ignore_ascii_case(actual.trim()),
        None => true,
    }
}

/// Restaurants loaded for planning, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// A new pool holding only the candidates that pass `filter`.
    pub fn filtered(&self, filter: &PoolFilter) -> CandidatePool {
        CandidatePool::new(
            self.candidates
                .iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect(),
        )
    }

    /// Distinct non-empty city names, sorted. Spellings differing only in
    /// case collapse to the first one seen.
    pub fn cities(&self) -> Vec<String> {
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        for city in self.candidates.iter().map(|c| c.city.trim()) {
            if !city.is_empty() {
                seen.entry(city.to_lowercase())
                    .or_insert_with(|| city.to_string());
            }
        }
        seen.into_values().collect()
    }

    pub fn wishlist_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.wishlist).count()
    }

    pub fn located_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.location.is_located())
            .count()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
