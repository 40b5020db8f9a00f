//! lsext - List File Extensions
//!
//! Scans a single directory, collects the distinct file-name suffixes of the
//! regular files it contains, and prints them in columns sized to the terminal.
//!
//! # Pipeline
//!
//! 1. [`scanner::Lister`] enumerates regular files directly inside a directory
//! 2. [`suffix::collect_suffixes`] extracts, sorts and deduplicates suffixes
//! 3. [`output::Layout`] fits column fields to the terminal width
//! 4. [`output::ColumnPrinter`] writes the rows
//!
//! # Example
//!
//! ```no_run
//! use lsext::output::{ColumnPrinter, Layout};
//! use lsext::scanner::Lister;
//! use lsext::suffix::collect_suffixes;
//! use std::path::Path;
//!
//! let lister = Lister::new(Path::new("."));
//! let suffixes = collect_suffixes(&lister).unwrap();
//! if let Some(layout) = Layout::compute(&suffixes, 80) {
//!     ColumnPrinter::new(layout)
//!         .write_to(std::io::stdout().lock(), &suffixes)
//!         .unwrap();
//! }
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod suffix;
pub mod terminal;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::cli::{Cli, ListingOptions};
use crate::error::ExitCode;
use crate::output::{ColumnPrinter, Layout};
use crate::scanner::Lister;
use crate::suffix::collect_suffixes;
use crate::terminal::TerminalWidth;

/// Run the application with parsed command-line arguments.
///
/// Initializes logging, resolves the target directory and terminal width,
/// and prints the suffix listing to stdout.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or stdout cannot be
/// written.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let options = cli.listing_options();
    let width = TerminalWidth::detect(options.width);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_listing(&options, width, &mut out)?;
    out.flush().context("Failed to flush output")?;

    Ok(ExitCode::Success)
}

/// Run the listing pipeline against `options.directory`, writing to `writer`.
///
/// This is the testable core of [`run_app`]: it performs no logging setup and
/// takes the terminal width explicitly.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or `writer` fails.
pub fn run_listing<W: Write>(
    options: &ListingOptions,
    width: TerminalWidth,
    writer: W,
) -> Result<()> {
    log::debug!(
        "Listing suffixes in {} (terminal width {})",
        options.directory.display(),
        width.columns()
    );

    let lister = Lister::new(&options.directory);
    let suffixes = collect_suffixes(&lister)
        .with_context(|| format!("Failed to list {}", options.directory.display()))?;

    let Some(layout) = Layout::compute(&suffixes, width.columns()) else {
        log::info!("No files found in {}", options.directory.display());
        return Ok(());
    };
    log::debug!(
        "{} unique suffixes, column width {}, {} per row",
        suffixes.len(),
        layout.column_width,
        layout.columns_per_row
    );

    ColumnPrinter::new(layout)
        .write_to(writer, &suffixes)
        .context("Failed to write suffix listing")?;

    Ok(())
}
