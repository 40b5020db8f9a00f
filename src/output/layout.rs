//! Column layout calculation.
//!
//! Every suffix is printed in a field of the same width: the longest display
//! label plus [`COLUMN_RIGHT_PADDING`]. The number of fields per row is the
//! terminal width divided by that field width, never less than one.

use crate::suffix::Suffix;

/// Spaces added to the right of the longest label.
pub const COLUMN_RIGHT_PADDING: usize = 5;

/// Length of the longest display label, or `None` for an empty slice.
#[must_use]
pub fn get_max_item_length(items: &[Suffix]) -> Option<usize> {
    items.iter().map(Suffix::label_len).max()
}

/// Printed field width for a given maximum label length.
#[must_use]
pub fn get_column_width(max_item_length: usize, padding: usize) -> usize {
    max_item_length + padding
}

/// How many fields of `column_width` fit in `terminal_columns`.
///
/// Always at least 1, so a terminal narrower than one field still prints one
/// suffix per line.
#[must_use]
pub fn get_columns_per_row(terminal_columns: usize, column_width: usize) -> usize {
    terminal_columns
        .checked_div(column_width)
        .unwrap_or(0)
        .max(1)
}

/// Field width and row length for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of every printed field, padding included
    pub column_width: usize,
    /// Number of fields on each printed line
    pub columns_per_row: usize,
}

impl Layout {
    /// Compute the layout for `items` on a terminal `terminal_columns` wide.
    ///
    /// Returns `None` when there is nothing to print.
    #[must_use]
    pub fn compute(items: &[Suffix], terminal_columns: usize) -> Option<Self> {
        let column_width = get_column_width(get_max_item_length(items)?, COLUMN_RIGHT_PADDING);
        Some(Self {
            column_width,
            columns_per_row: get_columns_per_row(terminal_columns, column_width),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffixes(items: &[&str]) -> Vec<Suffix> {
        items.iter().map(|s| Suffix::new(*s)).collect()
    }

    #[test]
    fn test_max_item_length() {
        assert_eq!(get_max_item_length(&suffixes(&[".a", ".bb", ".ccc"])), Some(4));
    }

    #[test]
    fn test_max_item_length_counts_placeholder() {
        assert_eq!(get_max_item_length(&suffixes(&["", ".c"])), Some(6));
    }

    #[test]
    fn test_max_item_length_empty() {
        assert_eq!(get_max_item_length(&[]), None);
    }

    #[test]
    fn test_column_width_adds_padding() {
        assert_eq!(get_column_width(3, COLUMN_RIGHT_PADDING), 8);
        assert_eq!(get_column_width(0, 2), 2);
    }

    #[test]
    fn test_columns_per_row() {
        assert_eq!(get_columns_per_row(80, 8), 10);
        assert_eq!(get_columns_per_row(81, 9), 9);
    }

    #[test]
    fn test_columns_per_row_narrow_terminal() {
        assert_eq!(get_columns_per_row(5, 8), 1);
        assert_eq!(get_columns_per_row(0, 8), 1);
        assert_eq!(get_columns_per_row(80, 0), 1);
    }

    #[test]
    fn test_layout_compute() {
        let layout = Layout::compute(&suffixes(&[".a", ".bb", ".ccc"]), 80).unwrap();
        assert_eq!(layout.column_width, 9);
        assert_eq!(layout.columns_per_row, 8);
    }

    #[test]
    fn test_layout_compute_empty() {
        assert_eq!(Layout::compute(&[], 80), None);
    }
}
