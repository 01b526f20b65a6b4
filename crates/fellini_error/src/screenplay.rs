//! Screenplay pipeline error types.

/// Specific error conditions for screenplay generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScreenplayErrorKind {
    /// Story idea was empty or whitespace
    #[display("Story idea cannot be empty")]
    EmptyStoryIdea,
    /// Requested film length is outside the supported range
    #[display("Requested length of {} minutes is outside the supported 1-10 minute range", _0)]
    LengthOutOfRange(u32),
}

/// Error type for screenplay pipeline operations.
///
/// # Examples
///
/// ```
/// use fellini_error::{ScreenplayError, ScreenplayErrorKind};
///
/// let err = ScreenplayError::new(ScreenplayErrorKind::EmptyStoryIdea);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Screenplay Error: {} at line {} in {}", kind, line, file)]
pub struct ScreenplayError {
    /// The specific error condition
    pub kind: ScreenplayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScreenplayError {
    /// Create a new ScreenplayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScreenplayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
