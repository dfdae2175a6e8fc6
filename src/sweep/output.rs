use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::{BudgetSummary, CaseResult};

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn budget_label(budget: Option<u32>) -> String {
    budget.map_or_else(|| "none".to_string(), |b| b.to_string())
}

/// Write every case result to a CSV file.
pub fn write_csv(results: &[CaseResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "pool",
        "pool_size",
        "days",
        "budget",
        "placed",
        "unplaced",
        "emitted_days",
        "route_km",
        "violations",
    ])?;

    for r in results {
        wtr.write_record([
            r.pool_index.to_string(),
            r.pool_size.to_string(),
            r.days.to_string(),
            budget_label(r.budget),
            r.placed.to_string(),
            r.unplaced.to_string(),
            r.emitted_days.to_string(),
            format!("{:.2}", r.route_km),
            r.violations.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write per-budget summaries to a JSON file with rounded floats.
pub fn write_summary_json(summaries: &[BudgetSummary], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "budgets": summaries.iter().map(|s| {
            serde_json::json!({
                "budget": s.budget,
                "runs": s.runs,
                "avg_fill_ratio": round_to(s.avg_fill_ratio, 3),
                "avg_placed": round_to(s.avg_placed, 2),
                "stalled_runs": s.stalled_runs,
                "violations": s.violations,
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print per-budget summaries to stdout.
pub fn print_summary(summaries: &[BudgetSummary]) {
    println!("\n=== Sweep Summary ===\n");
    println!(
        "{:>6}  {:>5}  {:>6}  {:>7}  {:>7}  {:>10}",
        "budget", "runs", "fill", "placed", "stalled", "violations"
    );

    for s in summaries {
        println!(
            "{:>6}  {:>5}  {:>5.1}%  {:>7.2}  {:>7}  {:>10}",
            budget_label(s.budget),
            s.runs,
            s.avg_fill_ratio * 100.0,
            s.avg_placed,
            s.stalled_runs,
            s.violations
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_round_to() {
        assert_float_absolute_eq!(round_to(0.12345, 3), 0.123, 1e-12);
        assert_float_absolute_eq!(round_to(2.5, 0), 3.0, 1e-12);
        assert_float_absolute_eq!(round_to(0.1236, 3), 0.124, 1e-12);
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let results = vec![CaseResult {
            pool_index: 2,
            pool_size: 10,
            days: 3,
            budget: None,
            placed: 6,
            unplaced: 4,
            emitted_days: 3,
            route_km: 12.3456,
            violations: 0,
        }];
        let file = NamedTempFile::new().unwrap();
        write_csv(&results, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("pool,pool_size,days,budget"));
        assert_eq!(lines.next().unwrap(), "2,10,3,none,6,4,3,12.35,0");
    }
}
