//! CLI entry point for the Code Jam 2016 solvers.
//!
//! Usage:
//!   codejam sheep <cases.in> [options]
//!   codejam pancakes <cases.in> [options]
//!
//! Options:
//!   --output <path>         Result file (default: CountingSheepResults.txt / PancakeResults.txt)
//!   --parallel              Solve cases on all cores
//!   --json                  Print a JSON run summary to stdout
//!   --verbose               Print diagnostic lines to stderr
//!   --policy <policy>       Pancake search policy: greedy (default) or exhaustive
//!   --max-states <n>        State limit for the exhaustive policy (default: 1048576)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use codejam2016::logging::enable_verbose_logging;
use codejam2016::{
    run, CountingSheep, FlipSearchConfig, Puzzle, RevengeOfThePancakes, RunOptions, RunSummary,
    SearchPolicy,
};

#[derive(Parser)]
#[command(name = "codejam")]
#[command(about = "Solve Code Jam 2016 qualification puzzles from case files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Counting Sheep: last number named before falling asleep
    Sheep {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Revenge of the Pancakes: fewest flips to serve each stack
    Pancakes {
        #[command(flatten)]
        common: CommonArgs,

        /// Frontier expansion policy
        #[arg(long, value_enum, default_value_t = PolicyArg::Greedy)]
        policy: PolicyArg,

        /// Maximum visited states for the exhaustive policy
        #[arg(long, default_value = "1048576")]
        max_states: usize,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Path to the case file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path of the result file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Solve cases in parallel
    #[arg(long)]
    parallel: bool,

    /// Print a JSON summary of the run
    #[arg(long)]
    json: bool,

    /// Print diagnostic output to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Greedy,
    Exhaustive,
}

impl From<PolicyArg> for SearchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Greedy => SearchPolicy::Greedy,
            PolicyArg::Exhaustive => SearchPolicy::Exhaustive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheep { common } => execute(&CountingSheep, &common),
        Commands::Pancakes {
            common,
            policy,
            max_states,
        } => {
            let puzzle = RevengeOfThePancakes {
                config: FlipSearchConfig {
                    policy: policy.into(),
                    max_states,
                    ..Default::default()
                },
            };
            execute(&puzzle, &common)
        }
    }
}

fn execute<P: Puzzle>(puzzle: &P, args: &CommonArgs) -> Result<()>
where
    <P::Input as std::str::FromStr>::Err: std::fmt::Display,
{
    if args.verbose {
        enable_verbose_logging();
    }

    let options = RunOptions {
        output: args.output.clone(),
        parallel: args.parallel,
    };

    let summary = run(puzzle, &args.file, &options)
        .with_context(|| format!("failed to solve {} cases from {:?}", puzzle.name(), args.file))?;

    report(&summary, args.json)
}

fn report(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(summary).context("failed to encode summary")?;
        println!("{}", output);
    } else {
        eprintln!(
            "Solved {} {} cases in {} ms, results written to {}",
            summary.cases_solved,
            summary.puzzle,
            summary.time_elapsed_ms,
            summary.output_path.display()
        );
    }
    Ok(())
}
