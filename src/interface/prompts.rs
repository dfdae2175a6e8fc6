use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TripError};
use crate::planner::constants::{MAX_BUDGET, MIN_BUDGET};

/// Minimum Jaro-Winkler similarity for a fuzzy city suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Options similar to `input`, best match first.
pub fn fuzzy_matches<'a>(options: &'a [String], input: &str) -> Vec<(&'a str, f64)> {
    let needle = input.trim().to_lowercase();
    let mut matches: Vec<(&str, f64)> = options
        .iter()
        .map(|o| (o.as_str(), jaro_winkler(&o.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// Prompt for the target city, with fuzzy matching against known cities.
pub fn prompt_city(cities: &[String]) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which city are you visiting?")
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(city) = cities.iter().find(|c| c.eq_ignore_ascii_case(input)) {
            return Ok(city.clone());
        }

        let candidates = fuzzy_matches(cities, input);

        if candidates.is_empty() {
            println!("No restaurants known in '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let city = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", city))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(city.to_string());
            }
            continue;
        }

        let mut options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(c, _)| c.to_string())
            .collect();
        let shown = options.len();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < shown {
            return Ok(options[selection].clone());
        }
    }
}

/// Prompt for a calendar date in `YYYY-MM-DD` form.
pub fn prompt_date(prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| TripError::InvalidInput(format!("Invalid date: {}", input.trim())))
}

/// Prompt for the per-day rating budget. Empty input means unbounded.
pub fn prompt_budget() -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Max total stars per day ({}-{}, blank for no limit)",
            MIN_BUDGET, MAX_BUDGET
        ))
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let budget: u32 = input
        .parse()
        .map_err(|_| TripError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_BUDGET..=MAX_BUDGET).contains(&budget) {
        return Err(TripError::InvalidBudget(budget));
    }

    Ok(Some(budget))
}
