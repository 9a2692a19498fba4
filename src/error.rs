//! Error types for case loading and the flip search.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, parsing or writing case files
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("case file is empty, expected a case count on line 1")]
    MissingCount,

    #[error("invalid case count {0:?} on line 1")]
    InvalidCount(String),

    #[error("expected {expected} cases but only found {found}")]
    MissingCase { expected: usize, found: usize },

    #[error("malformed case on line {line}: {value:?} ({reason})")]
    InvalidCase {
        line: usize,
        value: String,
        reason: String,
    },
}

/// Errors raised by the pancake flip search.
///
/// Every stack can be solved in at most `len` flips, so any of these
/// means the search itself is broken or was given limits too tight for
/// the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("frontier emptied after {rounds} rounds without reaching a served stack")]
    Exhausted { rounds: usize },

    #[error("search exceeded depth limit of {limit} flips")]
    DepthLimit { limit: usize },

    #[error("search visited more than {limit} states")]
    StateLimit { limit: usize },
}

/// Errors raised while running a puzzle end to end
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("case #{case}: {source}")]
    Search { case: usize, source: SearchError },
}
