use crate::models::{Candidate, Location};
use crate::planner::PlanOutcome;
use crate::planner::constants::{rating_name, rating_stars};

/// Display a planned itinerary day by day.
pub fn display_itinerary(outcome: &PlanOutcome) {
    let itinerary = &outcome.itinerary;

    if itinerary.is_empty() {
        println!("No itinerary generated (no candidates fit the trip constraints).");
        display_unplaced(&outcome.unplaced);
        return;
    }

    println!();
    println!("=== Dining Itinerary ===");

    let max_name_len = itinerary
        .assignments()
        .map(|m| m.candidate.name.chars().count())
        .max()
        .unwrap_or(10);

    for day in itinerary.iter() {
        println!();
        println!(
            "Day {} - {} ({} stars)",
            day.day,
            day.date.format("%a %Y-%m-%d"),
            day.rating_total()
        );

        for meal in &day.meals {
            let tags = if meal.candidate.wishlist {
                "  [Wishlist]"
            } else {
                ""
            };
            println!(
                "  {:<6}  {:<width$}  {}{}",
                meal.slot.label(),
                meal.candidate.name,
                rating_stars(meal.candidate.rating),
                tags,
                width = max_name_len
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Days with meals: {}", itinerary.len());
    println!("Total meals: {}", itinerary.meal_count());
    println!("Route length: {:.1} km", outcome.route.total_distance_km());
    display_unplaced(&outcome.unplaced);
    println!();
}

fn display_unplaced(unplaced: &[&Candidate]) {
    if unplaced.is_empty() {
        return;
    }
    println!();
    println!("Not scheduled ({}):", unplaced.len());
    for candidate in unplaced {
        println!("  {} ({})", candidate.name, rating_name(candidate.rating));
    }
}

/// Display a list of candidates with their details.
pub fn display_candidate_list(candidates: &[&Candidate], title: &str) {
    if candidates.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} restaurants) ===", title, candidates.len());
    println!();

    for c in candidates {
        let place = match c.location {
            Location::Located(coord) => format!("{:.4}, {:.4}", coord.latitude, coord.longitude),
            Location::Unlocated => "no coordinates".to_string(),
        };
        let mut flags = Vec::new();
        if c.wishlist {
            flags.push("wishlist");
        }
        if c.visited {
            flags.push("visited");
        }

        println!(
            "  {} {} - {} [{}]{}",
            rating_stars(c.rating),
            c.name,
            if c.cuisine.is_empty() { "-" } else { c.cuisine.as_str() },
            place,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", "))
            }
        );
    }

    println!();
}
