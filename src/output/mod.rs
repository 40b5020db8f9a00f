//! Terminal output for suffix listings.
//!
//! - [`layout`]: field width and columns-per-row calculation
//! - [`columns`]: row-major fixed-width printer

pub mod columns;
pub mod layout;

// Re-export main types
pub use columns::ColumnPrinter;
pub use layout::{
    get_column_width, get_columns_per_row, get_max_item_length, Layout, COLUMN_RIGHT_PADDING,
};
