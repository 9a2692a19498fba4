//! Diagnostic logging toggled from the command line.
//!
//! Messages go to stderr so they never mix with result files or the JSON
//! summary on stdout.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr when verbose logging is on
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!("[debug] {}", format!($($arg)*));
        }
    };
}
