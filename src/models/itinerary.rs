use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::Candidate;

/// Meal slots in the order they are filled each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 2] = [MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A restaurant booked into one meal of one day.
#[derive(Debug, Clone, Serialize)]
pub struct MealAssignment<'a> {
    /// Day index, starting at 1.
    pub day: u32,

    pub slot: MealSlot,

    /// Position within the day, starting at 1.
    pub order: u32,

    #[serde(rename = "restaurant", serialize_with = "serialize_restaurant_ref")]
    pub candidate: &'a Candidate,
}

/// Compact reference written in place of the full candidate record.
#[derive(Serialize)]
struct RestaurantRef<'a> {
    id: u64,
    name: &'a str,
    rating: u8,
}

fn serialize_restaurant_ref<S: Serializer>(
    candidate: &&Candidate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    RestaurantRef {
        id: candidate.id,
        name: &candidate.name,
        rating: candidate.rating,
    }
    .serialize(serializer)
}

/// All meals scheduled on one calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub meals: Vec<MealAssignment<'a>>,
}

impl DayPlan<'_> {
    /// Sum of rating tiers across the day.
    pub fn rating_total(&self) -> u32 {
        self.meals.iter().map(|m| u32::from(m.candidate.rating)).sum()
    }

    pub fn top_tier_count(&self) -> usize {
        self.meals.iter().filter(|m| m.candidate.is_top_tier()).count()
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Candidate> {
        self.meals
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| m.candidate)
    }
}

/// Ordered day plans. Days that received no meal are absent, not renumbered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Itinerary<'a> {
    pub days: Vec<DayPlan<'a>>,
}

impl<'a> Itinerary<'a> {
    pub fn new(days: Vec<DayPlan<'a>>) -> Self {
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayPlan<'a>> {
        self.days.iter()
    }

    /// Every assignment in day then slot order.
    pub fn assignments(&self) -> impl Iterator<Item = &MealAssignment<'a>> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }

    /// Restaurant ids in scheduling order.
    pub fn scheduled_ids(&self) -> Vec<u64> {
        self.assignments().map(|m| m.candidate.id).collect()
    }

    pub fn day(&self, day: u32) -> Option<&DayPlan<'a>> {
        self.days.iter().find(|d| d.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day<'a>(lunch: &'a Candidate, dinner: &'a Candidate) -> DayPlan<'a> {
        DayPlan {
            day: 1,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            meals: vec![
                MealAssignment {
                    day: 1,
                    slot: MealSlot::Lunch,
                    order: 1,
                    candidate: lunch,
                },
                MealAssignment {
                    day: 1,
                    slot: MealSlot::Dinner,
                    order: 2,
                    candidate: dinner,
                },
            ],
        }
    }

    #[test]
    fn test_day_totals() {
        let a = Candidate::new(1, "A", 3);
        let b = Candidate::new(2, "B", 2);
        let day = sample_day(&a, &b);

        assert_eq!(day.rating_total(), 5);
        assert_eq!(day.top_tier_count(), 1);
        assert_eq!(day.meal(MealSlot::Dinner).map(|c| c.id), Some(2));
    }

    #[test]
    fn test_serializes_restaurant_reference() {
        let a = Candidate::new(1, "A", 3).at(48.86, 2.35).wishlisted();
        let b = Candidate::new(2, "B", 2);
        let itinerary = Itinerary::new(vec![sample_day(&a, &b)]);

        let value = serde_json::to_value(&itinerary).unwrap();
        let meal = &value["days"][0]["meals"][0];

        assert_eq!(value["days"][0]["date"], "2026-05-01");
        assert_eq!(meal["slot"], "lunch");
        assert_eq!(meal["restaurant"]["id"], 1);
        assert_eq!(meal["restaurant"]["name"], "A");
        assert!(meal["restaurant"].get("latitude").is_none());
    }

    #[test]
    fn test_scheduled_ids_in_order() {
        let a = Candidate::new(10, "A", 1);
        let b = Candidate::new(20, "B", 1);
        let itinerary = Itinerary::new(vec![sample_day(&a, &b)]);

        assert_eq!(itinerary.scheduled_ids(), vec![10, 20]);
        assert_eq!(itinerary.meal_count(), 2);
        assert!(itinerary.day(2).is_none());
    }
}
