//! Command-line interface definitions for lsext.
//!
//! # Example
//!
//! ```bash
//! # List extensions in the current directory
//! lsext
//!
//! # List extensions in a home-relative directory
//! lsext -d ~/Downloads
//!
//! # Force a layout width (otherwise $COLUMNS, then the terminal is queried)
//! lsext --width 40
//! ```

use clap::Parser;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// List the distinct file extensions in a directory.
///
/// Extensions of regular files directly inside the directory are collected,
/// deduplicated case-insensitively, and printed in columns that fit the
/// terminal.
#[derive(Debug, Parser)]
#[command(name = "lsext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to inspect (a leading `~` expands to the home directory)
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub directory: PathBuf,

    /// Terminal width in columns, instead of querying the terminal
    #[arg(
        short,
        long,
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: Option<u16>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Resolved options for one listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    /// Directory to list, with `~` already expanded
    pub directory: PathBuf,
    /// Explicit terminal width, if given
    pub width: Option<u16>,
}

impl Cli {
    /// Resolve the parsed arguments into [`ListingOptions`].
    #[must_use]
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            directory: expand_tilde(&self.directory),
            width: self.width,
        }
    }
}

/// Expand a leading `~` component to the user's home directory.
///
/// Only a bare `~` or a `~/`-prefixed path is expanded; `~user` forms are left
/// untouched. If the home directory cannot be determined the path is returned
/// as given.
///
/// # Examples
///
/// ```
/// use lsext::cli::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/tmp")), Path::new("/tmp"));
/// assert_eq!(expand_tilde(Path::new("~user")), Path::new("~user"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => {
            log::debug!("Home directory unknown, not expanding {}", path.display());
            path.to_path_buf()
        }
    }
}
