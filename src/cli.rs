use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::Result;
use crate::interface::{prompt_budget, prompt_date};
use crate::models::Coordinate;
use crate::planner::TripRequest;
use crate::state::PoolFilter;

/// Dining trip planner: schedule award-graded restaurants into a day-by-day
/// lunch and dinner itinerary.
#[derive(Parser, Debug)]
#[command(name = "trip_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the restaurant file (JSON or CSV).
    #[arg(short, long, default_value = "restaurants.json", global = true)]
    pub file: String,

    /// Increase log detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a multi-day dining itinerary.
    Plan(PlanArgs),

    /// List candidate restaurants in priority order.
    List(FilterArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Restaurant pool filters shared by all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only restaurants in this city.
    #[arg(long)]
    pub city: Option<String>,

    /// Only restaurants in this country.
    #[arg(long)]
    pub country: Option<String>,

    /// Only restaurants serving this cuisine.
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Leave out restaurants already visited.
    #[arg(long)]
    pub skip_visited: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> PoolFilter {
        PoolFilter {
            city: self.city.clone(),
            country: self.country.clone(),
            cuisine: self.cuisine.clone(),
            skip_visited: self.skip_visited,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// First day of the trip (YYYY-MM-DD). Prompted when missing.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the trip, inclusive (YYYY-MM-DD). Prompted when missing.
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Maximum sum of star ratings per day (1-6).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=6))]
    pub budget: Option<u32>,

    /// Latitude to start routing from (defaults to the pool centroid).
    #[arg(long, requires = "start_lon", allow_negative_numbers = true)]
    pub start_lat: Option<f64>,

    /// Longitude to start routing from.
    #[arg(long, requires = "start_lat", allow_negative_numbers = true)]
    pub start_lon: Option<f64>,

    /// Write the itinerary as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the itinerary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn start_coordinate(&self) -> Option<Coordinate> {
        match (self.start_lat, self.start_lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// Build the trip request, prompting only for what the flags left out.
    pub fn resolve_request(&self, today: NaiveDate) -> Result<TripRequest> {
        self.resolve_request_with(today, prompt_date, prompt_budget)
    }

    /// Merge flags with prompted values. A missing start defaults to
    /// `today`, a missing end to the start. The budget is only asked for
    /// when a date had to be prompted and `--budget` was not given.
    pub fn resolve_request_with<D, B>(
        &self,
        today: NaiveDate,
        mut ask_date: D,
        ask_budget: B,
    ) -> Result<TripRequest>
    where
        D: FnMut(&str, NaiveDate) -> Result<NaiveDate>,
        B: FnOnce() -> Result<Option<u32>>,
    {
        let mut prompted = false;

        let start = match self.start {
            Some(start) => start,
            None => {
                prompted = true;
                ask_date("First day of the trip", today)?
            }
        };
        let end = match self.end {
            Some(end) => end,
            None => {
                prompted = true;
                ask_date("Last day of the trip", start)?
            }
        };
        let budget = match self.budget {
            Some(budget) => Some(budget),
            None if prompted => ask_budget()?,
            None => None,
        };

        let request = TripRequest::new(start, end, budget)?;
        Ok(match self.start_coordinate() {
            Some(coord) => request.with_start(coord),
            None => request,
        })
    }
}
