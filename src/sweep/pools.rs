use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Candidate, Coordinate};

/// Shape of the random restaurant pools used by the sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolShape {
    pub size: usize,
    pub center: Coordinate,
    /// Half-width in degrees of the square restaurants are scattered over.
    pub spread_deg: f64,
    /// Share of restaurants generated without coordinates.
    pub unlocated_ratio: f64,
    pub wishlist_ratio: f64,
    /// Relative weights of one, two and three star restaurants.
    pub rating_weights: [u32; 3],
}

impl Default for PoolShape {
    fn default() -> Self {
        Self {
            size: 24,
            center: Coordinate::new(48.8566, 2.3522),
            spread_deg: 0.05,
            unlocated_ratio: 0.15,
            wishlist_ratio: 0.2,
            // Roughly how award tiers are distributed in a real guide
            rating_weights: [6, 3, 1],
        }
    }
}

impl PoolShape {
    /// Generate one pool with ids starting at `first_id`.
    pub fn generate(&self, rng: &mut impl Rng, first_id: u64) -> Vec<Candidate> {
        (0..self.size as u64)
            .map(|offset| {
                let id = first_id + offset;
                let mut candidate = Candidate::new(id, format!("Restaurant {}", id), self.pick_rating(rng));

                if !rng.gen_bool(self.unlocated_ratio.clamp(0.0, 1.0)) {
                    let lat = self.center.latitude + self.jitter(rng);
                    let lon = self.center.longitude + self.jitter(rng);
                    candidate = candidate.at(lat, lon);
                }
                if rng.gen_bool(self.wishlist_ratio.clamp(0.0, 1.0)) {
                    candidate = candidate.wishlisted();
                }
                candidate
            })
            .collect()
    }

    fn jitter(&self, rng: &mut impl Rng) -> f64 {
        if self.spread_deg <= 0.0 {
            return 0.0;
        }
        rng.gen_range(-self.spread_deg..=self.spread_deg)
    }

    fn pick_rating(&self, rng: &mut impl Rng) -> u8 {
        let total: u32 = self.rating_weights.iter().sum();
        if total == 0 {
            return 1;
        }

        let mut roll = rng.gen_range(0..total);
        for (idx, weight) in self.rating_weights.iter().enumerate() {
            if roll < *weight {
                return idx as u8 + 1;
            }
            roll -= weight;
        }
        1
    }
}
