use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::models::Candidate;
use crate::planner::{PlanOutcome, TripRequest, date_for_day, plan_trip};

/// One combination of trip parameters to plan against each pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepCase {
    pub days: u32,
    pub budget: Option<u32>,
}

/// Metrics for one pool planned under one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub pool_index: usize,
    pub pool_size: usize,
    pub days: u32,
    pub budget: Option<u32>,
    pub placed: usize,
    pub unplaced: usize,
    pub emitted_days: usize,
    pub route_km: f64,
    /// Broken itinerary invariants. Anything but zero is a planner bug.
    pub violations: usize,
}

impl CaseResult {
    /// True when days went empty while candidates were still waiting.
    pub fn stalled(&self) -> bool {
        self.unplaced > 0 && self.emitted_days < self.days as usize
    }
}

/// Aggregate over every run that used the same budget.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    pub budget: Option<u32>,
    pub runs: usize,
    /// Mean share of the trip's meal slots that got filled.
    pub avg_fill_ratio: f64,
    pub avg_placed: f64,
    pub stalled_runs: usize,
    pub violations: usize,
}

/// Plan `pool` under `case` and measure the result.
pub fn evaluate_case(
    pool_index: usize,
    pool: &[Candidate],
    case: &SweepCase,
    start_date: NaiveDate,
) -> Result<CaseResult> {
    let end_date = date_for_day(start_date, case.days);
    let request = TripRequest::new(start_date, end_date, case.budget)?;
    let outcome = plan_trip(pool, &request);

    Ok(CaseResult {
        pool_index,
        pool_size: pool.len(),
        days: case.days,
        budget: case.budget,
        placed: outcome.itinerary.meal_count(),
        unplaced: outcome.unplaced.len(),
        emitted_days: outcome.itinerary.len(),
        route_km: outcome.route.total_distance_km(),
        violations: count_violations(&outcome, case.budget, case.days),
    })
}

/// Count itinerary invariant breaches: repeated restaurants, days over
/// budget, days with two top-tier meals, and more days than requested.
pub fn count_violations(outcome: &PlanOutcome, budget: Option<u32>, days: u32) -> usize {
    let itinerary = &outcome.itinerary;
    let mut violations = 0;

    let mut seen = HashSet::new();
    for meal in itinerary.assignments() {
        if !seen.insert(meal.candidate.id) {
            violations += 1;
        }
    }

    for day in itinerary.iter() {
        if budget.is_some_and(|cap| day.rating_total() > cap) {
            violations += 1;
        }
        if day.top_tier_count() > 1 {
            violations += 1;
        }
        if day.meals.is_empty() {
            violations += 1;
        }
    }

    if itinerary.len() > days as usize {
        violations += 1;
    }

    violations
}

/// Group results by budget, unbounded first.
pub fn summarize(results: &[CaseResult]) -> Vec<BudgetSummary> {
    let mut groups: BTreeMap<Option<u32>, Vec<&CaseResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.budget).or_default().push(result);
    }

    groups
        .into_iter()
        .map(|(budget, runs)| {
            let n = runs.len() as f64;
            let avg_fill_ratio = runs
                .iter()
                .map(|r| {
                    let slots = (r.days as usize * 2).min(r.pool_size);
                    if slots == 0 {
                        1.0
                    } else {
                        r.placed as f64 / slots as f64
                    }
                })
                .sum::<f64>()
                / n;

            BudgetSummary {
                budget,
                runs: runs.len(),
                avg_fill_ratio,
                avg_placed: runs.iter().map(|r| r.placed as f64).sum::<f64>() / n,
                stalled_runs: runs.iter().filter(|r| r.stalled()).count(),
                violations: runs.iter().map(|r| r.violations).sum(),
            }
        })
        .collect()
}
