use chrono::NaiveDate;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::sweep::evaluation::{BudgetSummary, CaseResult, SweepCase, evaluate_case, summarize};
use crate::sweep::pools::PoolShape;

/// Configuration for a planning sweep.
pub struct SweepConfig {
    pub pools: usize,
    pub seed: u64,
    pub day_counts: Vec<u32>,
    /// `None` entries run without a budget.
    pub budgets: Vec<Option<u32>>,
    pub shape: PoolShape,
    pub start_date: NaiveDate,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            pools: 50,
            seed: 123,
            day_counts: vec![1, 2, 3, 5],
            budgets: vec![None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)],
            shape: PoolShape::default(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
        }
    }
}

impl SweepConfig {
    pub fn cases(&self) -> Vec<SweepCase> {
        self.day_counts
            .iter()
            .flat_map(|&days| {
                self.budgets
                    .iter()
                    .map(move |&budget| SweepCase { days, budget })
            })
            .collect()
    }
}

/// Results from a sweep run.
pub struct SweepResults {
    /// One row per pool and case, in generation order.
    pub results: Vec<CaseResult>,
    pub summaries: Vec<BudgetSummary>,
}

/// Generate seeded pools and plan each against every case.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResults> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let cases = config.cases();
    let mut results = Vec::with_capacity(config.pools * cases.len());

    info!(
        "sweeping {} pools of {} restaurants across {} cases",
        config.pools,
        config.shape.size,
        cases.len()
    );

    for pool_index in 0..config.pools {
        let first_id = (pool_index * config.shape.size) as u64 + 1;
        let pool = config.shape.generate(&mut rng, first_id);

        for case in &cases {
            let result = evaluate_case(pool_index, &pool, case, config.start_date)?;
            if result.violations > 0 {
                warn!(
                    "pool {} days={} budget={:?}: {} invariant violation(s)",
                    pool_index, case.days, case.budget, result.violations
                );
            }
            results.push(result);
        }

        // Progress indicator every 10%
        if (pool_index + 1) % (config.pools / 10).max(1) == 0 {
            let pct = ((pool_index + 1) as f64 / config.pools as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    let summaries = summarize(&results);
    Ok(SweepResults { results, summaries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_cross_product() {
        let config = SweepConfig {
            day_counts: vec![1, 2],
            budgets: vec![None, Some(3)],
            ..Default::default()
        };
        let cases = config.cases();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases[1], SweepCase { days: 1, budget: Some(3) });
    }

    #[test]
    fn test_small_sweep_has_no_violations() {
        let config = SweepConfig {
            pools: 5,
            seed: 9,
            ..Default::default()
        };
        let sweep = run_sweep(&config).unwrap();

        assert_eq!(sweep.results.len(), 5 * config.cases().len());
        assert!(sweep.results.iter().all(|r| r.violations == 0));
        assert_eq!(sweep.summaries.len(), config.budgets.len());
    }
}
