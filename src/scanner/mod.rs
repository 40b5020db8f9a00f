//! Scanner module for single-directory file discovery.
//!
//! - [`lister`]: Non-recursive enumeration of regular files
//!
//! # Example
//!
//! ```no_run
//! use lsext::scanner::Lister;
//! use std::path::Path;
//!
//! let lister = Lister::new(Path::new("."));
//! for entry in lister.list().unwrap() {
//!     match entry {
//!         Ok(file) => println!("{}", file.path.display()),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod lister;

use std::path::PathBuf;

pub use lister::Lister;

/// A regular file found directly inside the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file (root joined with the file name)
    pub path: PathBuf,
    /// Whether the entry is a symbolic link to a regular file
    pub is_symlink: bool,
}

impl FileEntry {
    /// Create a new FileEntry for a plain (non-symlink) file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            is_symlink: false,
        }
    }
}

/// Errors that can occur while listing a directory.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error for `path` into the matching variant.
    #[must_use]
    pub fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io {
                path,
                source: error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_file_entry_new() {
        let entry = FileEntry::new(PathBuf::from("/test/file.txt"));
        assert_eq!(entry.path, PathBuf::from("/test/file.txt"));
        assert!(!entry.is_symlink);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::PermissionDenied(PathBuf::from("/test"));
        assert_eq!(err.to_string(), "Permission denied: /test");

        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Path not found: /missing");

        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");
    }

    #[test]
    fn test_scan_error_from_io() {
        let path = PathBuf::from("/x");
        assert!(matches!(
            ScanError::from_io(path.clone(), Error::from(ErrorKind::PermissionDenied)),
            ScanError::PermissionDenied(_)
        ));
        assert!(matches!(
            ScanError::from_io(path.clone(), Error::from(ErrorKind::NotFound)),
            ScanError::NotFound(_)
        ));
        assert!(matches!(
            ScanError::from_io(path, Error::other("boom")),
            ScanError::Io { .. }
        ));
    }
}
