//! Counting Sheep: name multiples of N until every decimal digit has been
//! seen at least once.

use std::fmt;

use crate::vlog;

/// Largest multiplier tried before giving up
pub const MAX_MULTIPLIER: u64 = 100;

/// Answer reported when the digits never complete
pub const INSOMNIA: &str = "INSOMNIA";

const ALL_DIGITS: u16 = 0b11_1111_1111;

/// The set of decimal digits observed so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCoverage {
    seen: u16,
}

impl DigitCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single digit (0-9)
    pub fn record_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10, "not a decimal digit: {}", digit);
        self.seen |= 1 << digit;
    }

    /// Record every decimal digit of `number`
    pub fn record_number(&mut self, mut number: u64) {
        loop {
            self.record_digit((number % 10) as u8);
            number /= 10;
            if number == 0 {
                break;
            }
        }
    }

    pub fn contains(&self, digit: u8) -> bool {
        digit < 10 && self.seen & (1 << digit) != 0
    }

    pub fn count(&self) -> u32 {
        self.seen.count_ones()
    }

    /// True once all ten digits have been seen
    pub fn is_complete(&self) -> bool {
        self.seen == ALL_DIGITS
    }
}

/// Result of counting sheep for one starting number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheepOutcome {
    /// Digits completed at `last_number = multiplier * n`
    Asleep { last_number: u64, multiplier: u64 },
    /// Digits never completed within `MAX_MULTIPLIER` multiples
    Insomnia,
}

impl fmt::Display for SheepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheepOutcome::Asleep { last_number, .. } => write!(f, "{}", last_number),
            SheepOutcome::Insomnia => f.write_str(INSOMNIA),
        }
    }
}

/// Count multiples of `n` until all ten digits have been seen.
///
/// Digits accumulate across multiples; the coverage is never reset.
pub fn count_sheep(n: u64) -> SheepOutcome {
    vlog!("counting sheep from {}", n);

    let mut coverage = DigitCoverage::new();

    for multiplier in 1..=MAX_MULTIPLIER {
        let Some(current) = n.checked_mul(multiplier) else {
            break;
        };

        coverage.record_number(current);

        if coverage.is_complete() {
            vlog!("finished {}, iterated {} times", n, multiplier);
            return SheepOutcome::Asleep {
                last_number: current,
                multiplier,
            };
        }
    }

    vlog!("finished {}, no sleep after {} multiples", n, MAX_MULTIPLIER);
    SheepOutcome::Insomnia
}

/// The contest answer for `n`: the last number named, or `INSOMNIA`
pub fn find_sleep_number(n: u64) -> String {
    count_sheep(n).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_complete() {
        let mut coverage = DigitCoverage::new();
        for digit in 0..10 {
            assert!(!coverage.is_complete());
            coverage.record_digit(digit);
        }
        assert!(coverage.is_complete());
    }

    #[test]
    fn test_coverage_incomplete_with_nine_digits() {
        let mut coverage = DigitCoverage::new();
        for digit in 0..9 {
            coverage.record_digit(digit);
        }
        assert!(!coverage.is_complete());
        assert_eq!(coverage.count(), 9);
        assert!(!coverage.contains(9));
    }

    #[test]
    fn test_record_number_zero() {
        let mut coverage = DigitCoverage::new();
        coverage.record_number(0);
        assert!(coverage.contains(0));
        assert_eq!(coverage.count(), 1);
    }

    #[test]
    fn test_record_number_accumulates() {
        let mut coverage = DigitCoverage::new();
        coverage.record_number(1692);
        coverage.record_number(3384);
        assert_eq!(coverage.count(), 7);
        for digit in [1, 2, 3, 4, 6, 8, 9] {
            assert!(coverage.contains(digit));
        }
    }

    #[test]
    fn test_known_answers() {
        assert_eq!(find_sleep_number(1), "10");
        assert_eq!(find_sleep_number(2), "90");
        assert_eq!(find_sleep_number(11), "110");
        assert_eq!(find_sleep_number(1692), "5076");
        assert_eq!(find_sleep_number(1234567890), "1234567890");
    }

    #[test]
    fn test_zero_is_insomnia() {
        assert_eq!(count_sheep(0), SheepOutcome::Insomnia);
        assert_eq!(find_sleep_number(0), INSOMNIA);
    }

    #[test]
    fn test_overflow_ends_in_insomnia() {
        // u64::MAX has no digit 2 and 2 * u64::MAX overflows
        assert_eq!(count_sheep(u64::MAX), SheepOutcome::Insomnia);
        assert_eq!(find_sleep_number(u64::MAX), INSOMNIA);
    }

    #[test]
    fn test_outcome_reports_multiplier() {
        assert_eq!(
            count_sheep(1692),
            SheepOutcome::Asleep {
                last_number: 5076,
                multiplier: 3,
            }
        );
    }

    #[test]
    fn test_answers_are_multiples_covering_all_digits() {
        let inputs = (1..=200).chain(999_900..=1_000_000).chain([999_999_999, 1_000_000_000]);
        for n in inputs {
            let answer = find_sleep_number(n);
            assert_ne!(answer, INSOMNIA, "n = {}", n);

            let value: u64 = answer.parse().unwrap();
            assert_eq!(value % n, 0, "n = {}", n);

            // every digit must appear somewhere in n, 2n, ..., value
            let mut coverage = DigitCoverage::new();
            let mut k = n;
            while k <= value {
                coverage.record_number(k);
                k += n;
            }
            assert!(coverage.is_complete(), "n = {}", n);
        }
    }
}
