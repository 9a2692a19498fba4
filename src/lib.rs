//! Solvers for two Code Jam 2016 qualification puzzles.
//!
//! - Counting Sheep: the last multiple of N named before every decimal
//!   digit has been seen.
//! - Revenge of the Pancakes: the fewest prefix flips that leave every
//!   pancake happy side up.
//!
//! Both puzzles share the case-file loader and result writer in
//! [`cases`], driven through the [`runner::Puzzle`] trait.

pub mod cases;
pub mod error;
pub mod flip_search;
pub mod logging;
pub mod pancake;
pub mod runner;
pub mod sheep;

// Re-export main types
pub use cases::{format_results, load_cases, parse_cases, write_results, Case, CaseSummary};
pub use error::{CaseError, RunError, SearchError};
pub use flip_search::{find_optimal_stack, min_flips, FlipSearchConfig, FlipSearchResult, SearchPolicy};
pub use pancake::{PancakeStack, ParseStackError};
pub use runner::{run, solve_cases, CountingSheep, Puzzle, RevengeOfThePancakes, RunOptions, RunSummary};
pub use sheep::{count_sheep, find_sleep_number, DigitCoverage, SheepOutcome, INSOMNIA, MAX_MULTIPLIER};
