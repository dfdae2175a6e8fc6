use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::models::{DayPlan, Itinerary, MealAssignment};

/// Calendar date of a 1-based trip day.
pub fn date_for_day(start_date: NaiveDate, day: u32) -> NaiveDate {
    let offset = Days::new(u64::from(day.saturating_sub(1)));
    start_date.checked_add_days(offset).unwrap_or(NaiveDate::MAX)
}

/// Attach dates to packed days and emit them in day order.
pub fn assemble_itinerary<'a>(
    days: BTreeMap<u32, Vec<MealAssignment<'a>>>,
    start_date: NaiveDate,
) -> Itinerary<'a> {
    let plans = days
        .into_iter()
        .filter(|(_, meals)| !meals.is_empty())
        .map(|(day, meals)| DayPlan {
            day,
            date: date_for_day(start_date, day),
            meals,
        })
        .collect();

    Itinerary::new(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, MealSlot};

    fn lunch(day: u32, candidate: &Candidate) -> MealAssignment<'_> {
        MealAssignment {
            day,
            slot: MealSlot::Lunch,
            order: 1,
            candidate,
        }
    }

    #[test]
    fn test_dates_follow_day_index() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        assert_eq!(date_for_day(start, 1), start);
        assert_eq!(
            date_for_day(start, 3),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_skipped_days_are_not_renumbered() {
        let a = Candidate::new(1, "A", 1);
        let b = Candidate::new(2, "B", 1);
        let mut days = BTreeMap::new();
        days.insert(3, vec![lunch(3, &b)]);
        days.insert(1, vec![lunch(1, &a)]);
        days.insert(2, Vec::new());

        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let itinerary = assemble_itinerary(days, start);

        let indices: Vec<u32> = itinerary.iter().map(|d| d.day).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(
            itinerary.days[1].date,
            NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
        );
    }
}
