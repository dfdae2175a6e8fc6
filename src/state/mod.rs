mod persistence;
mod pool;

pub use persistence::{load_candidates, save_itinerary};
pub use pool::{CandidatePool, PoolFilter};
