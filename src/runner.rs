//! Drives a puzzle over a case file: load, solve, write.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::cases::{load_cases, write_results, Case, CaseSummary};
use crate::error::{RunError, SearchError};
use crate::flip_search::{find_optimal_stack, FlipSearchConfig};
use crate::pancake::PancakeStack;
use crate::sheep::count_sheep;
use crate::vlog;

/// A contest puzzle that turns one parsed input into one answer
pub trait Puzzle: Sync {
    type Input: FromStr + Display + Send;

    /// Short name used in logs and summaries
    fn name(&self) -> &'static str;

    /// File name used when no output path is given
    fn default_output(&self) -> &'static str;

    fn solve(&self, input: &Self::Input) -> Result<String, SearchError>;
}

/// Counting Sheep
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSheep;

impl Puzzle for CountingSheep {
    type Input = u64;

    fn name(&self) -> &'static str {
        "sheep"
    }

    fn default_output(&self) -> &'static str {
        "CountingSheepResults.txt"
    }

    fn solve(&self, input: &u64) -> Result<String, SearchError> {
        Ok(count_sheep(*input).to_string())
    }
}

/// Revenge of the Pancakes
#[derive(Debug, Clone, Default)]
pub struct RevengeOfThePancakes {
    pub config: FlipSearchConfig,
}

impl Puzzle for RevengeOfThePancakes {
    type Input = PancakeStack;

    fn name(&self) -> &'static str {
        "pancakes"
    }

    fn default_output(&self) -> &'static str {
        "PancakeResults.txt"
    }

    fn solve(&self, input: &PancakeStack) -> Result<String, SearchError> {
        find_optimal_stack(input, &self.config).map(|result| result.flips.to_string())
    }
}

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Where to write results; defaults to the puzzle's file in the current directory
    pub output: Option<PathBuf>,
    /// Solve cases on the rayon thread pool
    pub parallel: bool,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub puzzle: String,
    pub cases_solved: usize,
    pub output_path: PathBuf,
    pub time_elapsed_ms: u64,
    pub cases: Vec<CaseSummary>,
}

/// Fill in the output of every case.
///
/// Fails if any case's search errors, naming that case; no partial
/// answers are kept in that case.
pub fn solve_cases<P: Puzzle>(
    puzzle: &P,
    cases: &mut [Case<P::Input>],
    parallel: bool,
) -> Result<(), RunError> {
    let solve_one = |case: &mut Case<P::Input>| -> Result<(), RunError> {
        let answer = puzzle.solve(&case.input).map_err(|source| RunError::Search {
            case: case.number,
            source,
        })?;
        vlog!("{} case #{}: {}", puzzle.name(), case.number, answer);
        case.output = Some(answer);
        Ok(())
    };

    let outcome = if parallel {
        cases.par_iter_mut().try_for_each(solve_one)
    } else {
        cases.iter_mut().try_for_each(solve_one)
    };

    if outcome.is_err() {
        for case in cases.iter_mut() {
            case.output = None;
        }
    }
    outcome
}

/// Load `input`, solve every case and write the result file
pub fn run<P: Puzzle>(puzzle: &P, input: &Path, options: &RunOptions) -> Result<RunSummary, RunError>
where
    <P::Input as FromStr>::Err: Display,
{
    let start_time = Instant::now();

    let mut cases: Vec<Case<P::Input>> = load_cases(input)?;
    vlog!("loaded {} {} cases from {:?}", cases.len(), puzzle.name(), input);

    solve_cases(puzzle, &mut cases, options.parallel)?;

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(puzzle.default_output()));
    write_results(&output_path, &cases)?;

    Ok(RunSummary {
        puzzle: puzzle.name().to_string(),
        cases_solved: cases.len(),
        output_path,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        cases: cases.iter().map(CaseSummary::from).collect(),
    })
}
