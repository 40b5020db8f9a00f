//! File-name suffix extraction and deduplication.
//!
//! A suffix is everything from the last `.` of a file name to its end,
//! including the `.` itself. Names without a usable `.` have an empty suffix:
//!
//! | File name    | Suffix  |
//! |--------------|---------|
//! | `notes.txt`  | `.txt`  |
//! | `a.tar.gz`   | `.gz`   |
//! | `Makefile`   | (empty) |
//! | `.gitignore` | (empty) |
//! | `trailing.`  | (empty) |
//!
//! # Example
//!
//! ```
//! use lsext::suffix::{unique_suffixes, Suffix};
//! use std::path::Path;
//!
//! let suffixes = unique_suffixes(
//!     ["b.TXT", "a.md", "c.txt"].iter().map(|n| Suffix::from_path(Path::new(n))),
//! );
//! let shown: Vec<&str> = suffixes.iter().map(Suffix::as_str).collect();
//! assert_eq!(shown, [".md", ".TXT"]);
//! ```

use std::fmt;
use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::scanner::{Lister, ScanError};

/// Label printed in place of the empty suffix.
pub const NO_SUFFIX_LABEL: &str = "(none)";

/// The suffix of one file name, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Suffix(String);

impl Suffix {
    /// Create a suffix from its text (including the leading `.`).
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Extract the suffix of a path's final component.
    ///
    /// Non-UTF-8 extensions are converted lossily.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if !ext.is_empty() => Self(format!(".{}", ext.to_string_lossy())),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text shown for this suffix: the suffix itself, or [`NO_SUFFIX_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        if self.is_empty() {
            NO_SUFFIX_LABEL
        } else {
            &self.0
        }
    }

    /// Width of [`Self::label`] in terminal columns.
    ///
    /// Wide characters (CJK, most emoji) count as two columns.
    #[must_use]
    pub fn label_len(&self) -> usize {
        UnicodeWidthStr::width(self.label())
    }

    fn sort_key(&self) -> (String, String) {
        (self.0.to_lowercase(), self.0.clone())
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort suffixes case-insensitively and drop case-insensitive duplicates.
///
/// Ties in the case-insensitive order are broken by the exact text, so the
/// result does not depend on input order. Of each group of equal suffixes the
/// first in that order is kept (`.TXT` over `.txt`).
#[must_use]
pub fn unique_suffixes(suffixes: impl IntoIterator<Item = Suffix>) -> Vec<Suffix> {
    let mut suffixes: Vec<Suffix> = suffixes.into_iter().collect();
    suffixes.sort_by_cached_key(Suffix::sort_key);
    suffixes.dedup_by(|later, kept| later.0.to_lowercase() == kept.0.to_lowercase());
    suffixes
}

/// List the directory and return its unique, sorted suffixes.
///
/// Failures on individual entries are logged and skipped.
///
/// # Errors
///
/// Returns a [`ScanError`] if the directory itself cannot be listed.
pub fn collect_suffixes(lister: &Lister) -> Result<Vec<Suffix>, ScanError> {
    let mut file_count = 0usize;
    let suffixes = lister.list()?.filter_map(|entry| match entry {
        Ok(file) => {
            file_count += 1;
            if file.is_symlink {
                log::trace!("Following symlink: {}", file.path.display());
            }
            Some(Suffix::from_path(&file.path))
        }
        Err(e) => {
            log::warn!("Skipping entry in {}: {}", lister.root().display(), e);
            None
        }
    });

    let unique = unique_suffixes(suffixes);
    log::debug!(
        "{} files in {}, {} unique suffixes",
        file_count,
        lister.root().display(),
        unique.len()
    );
    Ok(unique)
}
