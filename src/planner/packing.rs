use std::collections::BTreeMap;

use log::{debug, trace};

use crate::models::{Candidate, MealAssignment, MealSlot};
use crate::planner::route::Route;

/// Meals per day index, plus whatever the packer never consumed.
#[derive(Debug, Clone, Default)]
pub struct PackedDays<'a> {
    /// Only days that received at least one meal.
    pub days: BTreeMap<u32, Vec<MealAssignment<'a>>>,

    /// Route entries left over when the last day closed, in route order.
    pub unplaced: Vec<&'a Candidate>,
}

/// Why a slot attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The day's rating total would exceed the budget.
    OverBudget,
    /// Lunch was already top tier and so is this dinner.
    TopTierConflict,
}

/// Check whether `candidate` may take `slot` on a day that has already
/// spent `spent` rating points and booked `lunch`.
pub fn check_slot(
    slot: MealSlot,
    candidate: &Candidate,
    spent: u32,
    budget: Option<u32>,
    lunch: Option<&Candidate>,
) -> Result<(), Refusal> {
    if let Some(cap) = budget {
        if spent + u32::from(candidate.rating) > cap {
            return Err(Refusal::OverBudget);
        }
    }

    if slot == MealSlot::Dinner
        && candidate.is_top_tier()
        && lunch.is_some_and(|l| l.is_top_tier())
    {
        return Err(Refusal::TopTierConflict);
    }

    Ok(())
}

/// Walk the route and fill lunch then dinner for each of `day_count` days.
///
/// A refused candidate is not consumed: it stays at the head of the route
/// and is offered to the next slot. A candidate that never fits therefore
/// blocks every later day, and everything behind it ends up in
/// [`PackedDays::unplaced`].
pub fn pack_days<'a>(route: &Route<'a>, day_count: u32, budget: Option<u32>) -> PackedDays<'a> {
    let stops = route.stops();
    let mut next = 0usize;
    let mut days = BTreeMap::new();

    for day in 1..=day_count {
        let mut meals: Vec<MealAssignment<'a>> = Vec::new();
        let mut spent = 0u32;

        for slot in MealSlot::ALL {
            let Some(&candidate) = stops.get(next) else {
                break;
            };
            let lunch = meals
                .iter()
                .find(|m| m.slot == MealSlot::Lunch)
                .map(|m| m.candidate);

            if let Err(refusal) = check_slot(slot, candidate, spent, budget, lunch) {
                trace!("day {} {}: refused #{} ({:?})", day, slot, candidate.id, refusal);
                continue;
            }

            spent += u32::from(candidate.rating);
            meals.push(MealAssignment {
                day,
                slot,
                order: meals.len() as u32 + 1,
                candidate,
            });
            next += 1;
        }

        if meals.is_empty() {
            debug!("day {} left empty", day);
        } else {
            days.insert(day, meals);
        }
    }

    PackedDays {
        days,
        unplaced: stops[next..].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::route::sequence_route;

    /// Route in pool order: nothing is located, so the sequencer keeps it.
    fn route_of(pool: &[Candidate]) -> Route<'_> {
        let refs: Vec<&Candidate> = pool.iter().collect();
        sequence_route(&refs, None)
    }

    fn day_ids(packed: &PackedDays, day: u32) -> Vec<u64> {
        packed.days[&day].iter().map(|m| m.candidate.id).collect()
    }

    #[test]
    fn test_fills_lunch_then_dinner() {
        let pool = vec![
            Candidate::new(1, "A", 1),
            Candidate::new(2, "B", 2),
            Candidate::new(3, "C", 1),
        ];
        let packed = pack_days(&route_of(&pool), 2, None);

        assert_eq!(day_ids(&packed, 1), vec![1, 2]);
        assert_eq!(day_ids(&packed, 2), vec![3]);
        assert_eq!(packed.days[&1][1].slot, MealSlot::Dinner);
        assert_eq!(packed.days[&1][1].order, 2);
        assert!(packed.unplaced.is_empty());
    }

    #[test]
    fn test_top_tier_conflict_defers_dinner() {
        let pool = vec![
            Candidate::new(1, "X", 3),
            Candidate::new(2, "Y", 3),
            Candidate::new(3, "Z", 1),
        ];
        let packed = pack_days(&route_of(&pool), 2, None);

        assert_eq!(day_ids(&packed, 1), vec![1]);
        // Y retries as the next day's lunch, then Z joins for dinner
        assert_eq!(day_ids(&packed, 2), vec![2, 3]);
    }

    #[test]
    fn test_budget_blocks_and_carries_over() {
        let pool = vec![
            Candidate::new(1, "A", 2),
            Candidate::new(2, "B", 2),
            Candidate::new(3, "C", 1),
        ];
        let packed = pack_days(&route_of(&pool), 3, Some(3));

        assert_eq!(day_ids(&packed, 1), vec![1]);
        assert_eq!(day_ids(&packed, 2), vec![2, 3]);
        assert!(!packed.days.contains_key(&3));
    }

    #[test]
    fn test_unfittable_candidate_stalls_remaining_days() {
        let pool = vec![
            Candidate::new(1, "A", 1),
            Candidate::new(2, "Too grand", 3),
            Candidate::new(3, "C", 1),
        ];
        let packed = pack_days(&route_of(&pool), 4, Some(2));

        assert_eq!(packed.days.len(), 1);
        assert_eq!(day_ids(&packed, 1), vec![1]);
        let unplaced: Vec<u64> = packed.unplaced.iter().map(|c| c.id).collect();
        assert_eq!(unplaced, vec![2, 3]);
    }

    #[test]
    fn test_zero_budget_places_nothing() {
        let pool = vec![Candidate::new(1, "A", 1)];
        let packed = pack_days(&route_of(&pool), 3, Some(0));
        assert!(packed.days.is_empty());
        assert_eq!(packed.unplaced.len(), 1);
    }

    #[test]
    fn test_zero_days_and_empty_route() {
        let pool = vec![Candidate::new(1, "A", 1)];
        assert!(pack_days(&route_of(&pool), 0, None).days.is_empty());

        let empty: Vec<Candidate> = Vec::new();
        let packed = pack_days(&route_of(&empty), 5, None);
        assert!(packed.days.is_empty());
        assert!(packed.unplaced.is_empty());
    }

    #[test]
    fn test_check_slot_rules() {
        let top = Candidate::new(1, "Top", 3);
        let other_top = Candidate::new(2, "Other top", 3);
        let small = Candidate::new(3, "Small", 1);

        assert_eq!(check_slot(MealSlot::Lunch, &top, 0, None, None), Ok(()));
        assert_eq!(
            check_slot(MealSlot::Dinner, &other_top, 3, None, Some(&top)),
            Err(Refusal::TopTierConflict)
        );
        assert_eq!(
            check_slot(MealSlot::Dinner, &small, 3, None, Some(&top)),
            Ok(())
        );
        assert_eq!(
            check_slot(MealSlot::Dinner, &small, 3, Some(3), Some(&top)),
            Err(Refusal::OverBudget)
        );
        assert_eq!(check_slot(MealSlot::Lunch, &top, 0, Some(3), None), Ok(()));
    }
}
