//! Column printer for suffix listings.
//!
//! Suffixes are written row-major: the first `columns_per_row` suffixes on
//! the first line, the next batch on the second, and so on. Each label is
//! left-justified in a field of [`Layout::column_width`] characters.
//!
//! # Example
//!
//! ```
//! use lsext::output::{ColumnPrinter, Layout};
//! use lsext::suffix::Suffix;
//!
//! let suffixes = vec![Suffix::new(""), Suffix::new(".rs"), Suffix::new(".toml")];
//! let layout = Layout { column_width: 8, columns_per_row: 2 };
//!
//! let mut out = Vec::new();
//! ColumnPrinter::new(layout).write_to(&mut out, &suffixes).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "(none)  .rs     \n.toml   \n");
//! ```

use std::io::{self, Write};

use super::Layout;
use crate::suffix::Suffix;

/// Writes suffixes in fixed-width columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnPrinter {
    layout: Layout,
}

impl ColumnPrinter {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Write `suffixes` to `writer`, one line per row.
    ///
    /// An empty slice writes nothing.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut writer: W, suffixes: &[Suffix]) -> io::Result<()> {
        let width = self.layout.column_width;
        for row in suffixes.chunks(self.layout.columns_per_row.max(1)) {
            for suffix in row {
                // Pad by display width; `{:<N}` would pad by chars.
                let padding = width.saturating_sub(suffix.label_len());
                write!(writer, "{}{:padding$}", suffix.label(), "")?;
            }
            writeln!(writer)?;
        }
        writer.flush()
    }
}
