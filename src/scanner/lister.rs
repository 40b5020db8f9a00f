//! Single-directory lister using walkdir bounded to depth 1.
//!
//! # Overview
//!
//! [`Lister`] yields the regular files directly inside one directory. It never
//! descends into subdirectories. Symbolic links are reported when their target
//! is a regular file, the same answer a plain `metadata().is_file()` gives.
//!
//! Problems with the root directory are reported up front by
//! [`Lister::list`]; problems with individual children are yielded as `Err`
//! items so the caller can skip them and continue.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Lister for the regular files of one directory.
#[derive(Debug, Clone)]
pub struct Lister {
    /// Directory to list
    root: PathBuf,
}

impl Lister {
    /// Create a new lister for the given directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// The directory this lister reads.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate the root directory and return an iterator over its files.
    ///
    /// Order is whatever the filesystem yields.
    ///
    /// # Errors
    ///
    /// - [`ScanError::NotFound`] if the root does not exist
    /// - [`ScanError::NotADirectory`] if the root is not a directory
    /// - [`ScanError::PermissionDenied`] if the root cannot be read
    /// - [`ScanError::Io`] for any other failure reading the root
    pub fn list(
        &self,
    ) -> Result<impl Iterator<Item = Result<FileEntry, ScanError>> + '_, ScanError> {
        self.validate_root()?;

        let walk_dir = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        Ok(walk_dir
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry.path(), entry.file_type()),
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            }))
    }

    fn validate_root(&self) -> Result<(), ScanError> {
        let metadata = fs::metadata(&self.root)
            .map_err(|e| ScanError::from_io(self.root.clone(), e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        // Surface an unreadable root here rather than as a per-entry error.
        fs::read_dir(&self.root).map_err(|e| ScanError::from_io(self.root.clone(), e))?;
        Ok(())
    }

    /// Turn one directory child into a file entry, or skip it.
    fn process_entry(
        &self,
        path: &Path,
        file_type: fs::FileType,
    ) -> Option<Result<FileEntry, ScanError>> {
        if file_type.is_dir() {
            log::trace!("Skipping directory: {}", path.display());
            return None;
        }

        if file_type.is_file() {
            return Some(Ok(FileEntry::new(path.to_path_buf())));
        }

        if file_type.is_symlink() {
            return match fs::metadata(path) {
                Ok(target) if target.is_file() => Some(Ok(FileEntry {
                    path: path.to_path_buf(),
                    is_symlink: true,
                })),
                Ok(_) => {
                    log::trace!("Skipping symlink to non-file: {}", path.display());
                    None
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::debug!("Skipping broken symlink: {}", path.display());
                    None
                }
                Err(e) => Some(Err(ScanError::from_io(path.to_path_buf(), e))),
            };
        }

        log::trace!("Skipping special file: {}", path.display());
        None
    }

    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let message = error.to_string();

        match error.into_io_error() {
            Some(io_error) => ScanError::from_io(path, io_error),
            None => ScanError::Io {
                path,
                source: std::io::Error::other(message),
            },
        }
    }
}
