//! Terminal width detection.
//!
//! The width is resolved once at startup, in order: an explicit `--width`,
//! a usable `$COLUMNS`, the crossterm terminal query, and finally
//! [`DEFAULT_TERMINAL_COLUMNS`]. A malformed `$COLUMNS` is ignored rather
//! than treated as a usage error.

use std::env;

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_TERMINAL_COLUMNS: u16 = 80;

/// Environment variable consulted before querying the terminal.
pub const COLUMNS_ENV: &str = "COLUMNS";

#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Parse a `$COLUMNS` value, returning `None` unless it is a positive integer.
#[must_use]
pub fn parse_columns(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|&columns| columns > 0)
}

/// Read `$COLUMNS`, ignoring it when unset, empty, zero or not a number.
#[must_use]
pub fn columns_from_env() -> Option<u16> {
    let value = env::var(COLUMNS_ENV).ok()?;
    let columns = parse_columns(&value);
    if columns.is_none() {
        log::debug!("Ignoring unusable {}={:?}", COLUMNS_ENV, value);
    }
    columns
}

/// The number of character columns available for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalWidth(u16);

impl TerminalWidth {
    /// Create a width from an explicit column count.
    #[must_use]
    pub fn new(columns: u16) -> Self {
        Self(columns)
    }

    /// Detect the output width.
    ///
    /// An explicit `override_columns` (from `--width`) wins, then a usable
    /// `$COLUMNS`. Otherwise the controlling terminal is queried, falling back
    /// to [`DEFAULT_TERMINAL_COLUMNS`] if that fails or reports zero columns.
    #[must_use]
    pub fn detect(override_columns: Option<u16>) -> Self {
        if let Some(columns) = override_columns {
            log::debug!("Using explicit terminal width: {}", columns);
            return Self(columns);
        }

        if let Some(columns) = columns_from_env() {
            log::debug!("Using {} terminal width: {}", COLUMNS_ENV, columns);
            return Self(columns);
        }

        match crossterm::terminal::size() {
            Ok((columns, _rows)) if columns > 0 => Self(columns),
            Ok(_) => {
                log::debug!(
                    "Terminal reported zero columns, assuming {}",
                    DEFAULT_TERMINAL_COLUMNS
                );
                Self::default()
            }
            Err(e) => {
                log::debug!(
                    "Terminal size unavailable ({}), assuming {}",
                    e,
                    DEFAULT_TERMINAL_COLUMNS
                );
                Self::default()
            }
        }
    }

    /// Get the column count as a `usize` for layout math.
    #[must_use]
    pub fn columns(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for TerminalWidth {
    fn default() -> Self {
        Self(DEFAULT_TERMINAL_COLUMNS)
    }
}
