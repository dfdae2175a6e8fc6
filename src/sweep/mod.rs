pub mod evaluation;
pub mod output;
pub mod pools;
pub mod run;

pub use evaluation::{BudgetSummary, CaseResult, SweepCase, count_violations, evaluate_case, summarize};
pub use output::{print_summary, write_csv, write_summary_json};
pub use pools::PoolShape;
pub use run::{SweepConfig, SweepResults, run_sweep};
