pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_matches, prompt_budget, prompt_city, prompt_date};
pub use render::{display_candidate_list, display_itinerary};
