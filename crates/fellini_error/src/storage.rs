//! Run-workspace storage error types.

/// Specific error conditions for per-run artifact storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create a directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read a file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to build a run archive
    #[display("Failed to archive run: {}", _0)]
    Archive(String),
    /// An archive or clear operation was requested with no run in progress.
    ///
    /// Recoverable: there is simply nothing to save or remove.
    #[display("No active run")]
    NoActiveRun,
}

/// Storage error with source location tracking.
///
/// # Examples
///
/// ```
/// use fellini_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NoActiveRun);
/// assert!(format!("{}", err).contains("No active run"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The specific error condition
    pub kind: StorageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
