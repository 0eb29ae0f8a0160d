//! Small CLI-scoped constants and a verbosity-gated print macro: a
//! process-wide display level gating `eprintln!` calls, scaled down to
//! this CLI's three subcommands.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "fastlog2";

static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(1);

/// Sets the process-wide display level (higher = more output).
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Reads the process-wide display level.
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Prints to stderr only when the display level is at least `$level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
