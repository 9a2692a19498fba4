//! Case file loading and result writing.
//!
//! Input files start with the number of cases T, followed by one raw
//! case per line. Results are written as `Case #k: answer`, one per
//! line, in case order.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CaseError;

/// One contest case: its 1-based number, parsed input and answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case<I> {
    pub number: usize,
    pub input: I,
    pub output: Option<String>,
}

impl<I> Case<I> {
    pub fn new(number: usize, input: I) -> Self {
        Self {
            number,
            input,
            output: None,
        }
    }

    /// Format as a result line, or `None` if the case has not been solved
    pub fn result_line(&self) -> Option<String> {
        self.output
            .as_ref()
            .map(|answer| format!("Case #{}: {}", self.number, answer))
    }
}

/// Serializable view of a solved case
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub number: usize,
    pub input: String,
    pub output: Option<String>,
}

impl<I: Display> From<&Case<I>> for CaseSummary {
    fn from(case: &Case<I>) -> Self {
        Self {
            number: case.number,
            input: case.input.to_string(),
            output: case.output.clone(),
        }
    }
}

/// Parse cases from the text of a case file
pub fn parse_cases<I>(text: &str) -> Result<Vec<Case<I>>, CaseError>
where
    I: FromStr,
    I::Err: Display,
{
    let mut lines = text.lines();

    let count_line = lines.next().ok_or(CaseError::MissingCount)?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| CaseError::InvalidCount(count_line.to_string()))?;

    let mut cases = Vec::new();
    for number in 1..=count {
        let raw = lines.next().ok_or(CaseError::MissingCase {
            expected: count,
            found: number - 1,
        })?;
        let value = raw.trim();
        if value.is_empty() {
            return Err(CaseError::InvalidCase {
                line: number + 1,
                value: String::new(),
                reason: "blank case line".to_string(),
            });
        }

        let input = value.parse::<I>().map_err(|e| CaseError::InvalidCase {
            line: number + 1,
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        cases.push(Case::new(number, input));
    }

    Ok(cases)
}

/// Read and parse a case file
pub fn load_cases<I>(path: &Path) -> Result<Vec<Case<I>>, CaseError>
where
    I: FromStr,
    I::Err: Display,
{
    let text = fs::read_to_string(path).map_err(|source| CaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&text)
}

/// Render result lines sorted by case number; unsolved cases are skipped
pub fn format_results<I>(cases: &[Case<I>]) -> String {
    let mut ordered: Vec<&Case<I>> = cases.iter().collect();
    ordered.sort_by_key(|case| case.number);

    let mut out = String::new();
    for line in ordered.iter().filter_map(|case| case.result_line()) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the result file for `cases`, replacing any existing file
pub fn write_results<I>(path: &Path, cases: &[Case<I>]) -> Result<(), CaseError> {
    fs::write(path, format_results(cases)).map_err(|source| CaseError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pancake::PancakeStack;

    #[test]
    fn test_parse_integer_cases() {
        let cases: Vec<Case<u64>> = parse_cases("3\n0\n1\n1692\n").unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0], Case::new(1, 0));
        assert_eq!(cases[2], Case::new(3, 1692));
    }

    #[test]
    fn test_parse_stack_cases_with_crlf() {
        let cases: Vec<Case<PancakeStack>> = parse_cases("2\r\n-+\r\n+++\r\n").unwrap();
        assert_eq!(cases[0].input.to_string(), "-+");
        assert_eq!(cases[1].input.to_string(), "+++");
    }

    #[test]
    fn test_extra_lines_ignored() {
        let cases: Vec<Case<u64>> = parse_cases("1\n5\n6\n\n").unwrap();
        assert_eq!(cases.len(), 1);
    }

    #[test]
    fn test_missing_count() {
        let err = parse_cases::<u64>("").unwrap_err();
        assert!(matches!(err, CaseError::MissingCount));
    }

    #[test]
    fn test_invalid_count() {
        let err = parse_cases::<u64>("three\n1\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCount(ref s) if s == "three"));
    }

    #[test]
    fn test_missing_case() {
        let err = parse_cases::<u64>("3\n1\n2\n").unwrap_err();
        assert!(matches!(err, CaseError::MissingCase { expected: 3, found: 2 }));
    }

    #[test]
    fn test_malformed_case_reports_line() {
        let err = parse_cases::<u64>("2\n7\nseven\n").unwrap_err();
        match err {
            CaseError::InvalidCase { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "seven");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_cases::<PancakeStack>("1\n+-?\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCase { line: 2, .. }));
    }

    #[test]
    fn test_oversized_count_reports_missing_case() {
        let text = format!("{}\n1\n", usize::MAX);
        let err = parse_cases::<u64>(&text).unwrap_err();
        assert!(matches!(
            err,
            CaseError::MissingCase {
                expected: usize::MAX,
                found: 1
            }
        ));
    }

    #[test]
    fn test_blank_case_line_is_malformed() {
        // count one too high, file ends with a blank line
        let err = parse_cases::<PancakeStack>("3\n-\n+\n\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCase { line: 4, .. }));

        let err = parse_cases::<PancakeStack>("2\n-+\n\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCase { line: 3, .. }));

        // blank line between cases
        let err = parse_cases::<PancakeStack>("3\n-\n   \n+\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCase { line: 3, .. }));

        let err = parse_cases::<u64>("2\n5\n\n").unwrap_err();
        assert!(matches!(err, CaseError::InvalidCase { line: 3, .. }));
    }

    #[test]
    fn test_short_file_without_blank_line() {
        let err = parse_cases::<PancakeStack>("3\n-\n+\n").unwrap_err();
        assert!(matches!(err, CaseError::MissingCase { expected: 3, found: 2 }));
    }

    #[test]
    fn test_format_results_in_case_order() {
        let mut cases = vec![Case::new(2, 2u64), Case::new(1, 0u64), Case::new(3, 7u64)];
        cases[0].output = Some("90".to_string());
        cases[1].output = Some("INSOMNIA".to_string());
        cases[2].output = Some("70".to_string());

        assert_eq!(
            format_results(&cases),
            "Case #1: INSOMNIA\nCase #2: 90\nCase #3: 70\n"
        );
    }

    #[test]
    fn test_unsolved_case_has_no_line() {
        let case = Case::new(1, 5u64);
        assert_eq!(case.result_line(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_cases::<u64>(Path::new("/nonexistent/codejam/cases.in")).unwrap_err();
        assert!(matches!(err, CaseError::Read { .. }));
    }
}
