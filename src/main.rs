use std::path::Path;

use chrono::Local;
use clap::Parser;
use log::info;

use dining_trip_planner_rs::cli::{Cli, Command, FilterArgs, PlanArgs};
use dining_trip_planner_rs::error::{Result, TripError};
use dining_trip_planner_rs::interface::{display_candidate_list, display_itinerary, prompt_city};
use dining_trip_planner_rs::logging::init_logger;
use dining_trip_planner_rs::planner::{plan_trip, prioritize};
use dining_trip_planner_rs::state::{CandidatePool, load_candidates, save_itinerary};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.file, args),
        Command::List(filter) => cmd_list(&cli.file, &filter),
    }
}

fn load_pool(file_path: &str) -> Result<Option<CandidatePool>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Restaurant file not found: {}", file_path);
        eprintln!("Pass --file with a JSON or CSV restaurant list.");
        return Ok(None);
    }

    let pool = CandidatePool::new(load_candidates(path)?);
    info!("loaded {} restaurants from {}", pool.len(), file_path);
    Ok(Some(pool))
}

/// Plan a dining itinerary for one city.
fn cmd_plan(file_path: &str, mut args: PlanArgs) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    if args.filter.city.is_none() {
        let cities = pool.cities();
        if !cities.is_empty() {
            args.filter.city = Some(prompt_city(&cities)?);
        }
    }

    let pool = pool.filtered(&args.filter.to_filter());
    if pool.is_empty() {
        return Err(TripError::NoCandidates);
    }

    info!(
        "{} restaurants ({} on wishlist, {} with coordinates)",
        pool.len(),
        pool.wishlist_count(),
        pool.located_count()
    );

    let request = args.resolve_request(Local::now().date_naive())?;

    info!(
        "planning {} day(s) from {}{}",
        request.day_count(),
        request.start_date,
        request
            .budget
            .map(|b| format!(", at most {} stars per day", b))
            .unwrap_or_default()
    );

    let outcome = plan_trip(pool.as_slice(), &request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        display_itinerary(&outcome);
    }

    if let Some(output) = &args.output {
        save_itinerary(output, &outcome)?;
        println!("Itinerary saved to {}", output.display());
    }

    Ok(())
}

/// List restaurants in the order the planner seeds them.
fn cmd_list(file_path: &str, filter: &FilterArgs) -> Result<()> {
    let Some(pool) = load_pool(file_path)? else {
        return Ok(());
    };

    let pool = pool.filtered(&filter.to_filter());
    let ordered = prioritize(pool.as_slice());

    let title = match &filter.city {
        Some(city) => format!("Restaurants in {}", city),
        None => "Restaurants".to_string(),
    };
    display_candidate_list(&ordered, &title);

    Ok(())
}
