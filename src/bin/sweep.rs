use std::path::PathBuf;

use clap::{ArgAction, Parser};

use dining_trip_planner_rs::logging::init_logger;
use dining_trip_planner_rs::models::Coordinate;
use dining_trip_planner_rs::planner::constants::{MAX_BUDGET, MIN_BUDGET};
use dining_trip_planner_rs::sweep::{
    PoolShape, SweepConfig, print_summary, run_sweep, write_csv, write_summary_json,
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Plan many random restaurant pools and report how budgets affect coverage")]
struct Args {
    /// Number of random pools to generate
    #[arg(long, default_value = "50")]
    pools: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Restaurants per pool
    #[arg(long, default_value = "24")]
    size: usize,

    /// Share of restaurants without coordinates (0-1)
    #[arg(long, default_value = "0.15")]
    unlocated: f64,

    /// Trip lengths in days (comma-separated)
    #[arg(long, default_value = "1,2,3,5")]
    days: String,

    /// Per-day budgets (comma-separated, "none" for unbounded)
    #[arg(long, default_value = "none,1,2,3,4,5,6")]
    budgets: String,

    /// Output CSV file for all results
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the per-budget summary
    #[arg(long, default_value = "sweep_summary.json")]
    json: PathBuf,

    /// Increase log detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_days(s: &str) -> Vec<u32> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .filter(|&d| d > 0)
        .collect()
}

fn parse_budgets(s: &str) -> Vec<Option<u32>> {
    s.split(',')
        .filter_map(|part| match part.trim() {
            "none" | "" => Some(None),
            value => value
                .parse::<u32>()
                .ok()
                .filter(|b| (MIN_BUDGET..=MAX_BUDGET).contains(b))
                .map(Some),
        })
        .collect()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.verbose, false) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let day_counts = parse_days(&args.days);
    if day_counts.is_empty() {
        eprintln!("Error: no valid day counts provided");
        std::process::exit(1);
    }

    let budgets = parse_budgets(&args.budgets);
    if budgets.is_empty() {
        eprintln!("Error: no valid budgets provided");
        std::process::exit(1);
    }

    println!("Trip lengths: {:?}", day_counts);
    println!("Budgets: {:?}", budgets);

    let config = SweepConfig {
        pools: args.pools,
        seed: args.seed,
        day_counts,
        budgets,
        shape: PoolShape {
            size: args.size,
            center: Coordinate::new(48.8566, 2.3522),
            unlocated_ratio: args.unlocated,
            ..Default::default()
        },
        ..Default::default()
    };

    let sweep = match run_sweep(&config) {
        Ok(sweep) => sweep,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_summary(&sweep.summaries);

    if let Err(e) = write_csv(&sweep.results, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all results to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&sweep.summaries, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summary to {:?}", args.json);
    }
}
