//! Top-level error wrapper types.

use crate::{ConfigError, ProviderError, ScreenplayError, StorageError};

/// The foundation error enum for the Fellini workspace.
///
/// # Examples
///
/// ```
/// use fellini_error::{FelliniError, ProviderError, ProviderErrorKind};
///
/// let provider_err = ProviderError::new(ProviderErrorKind::EmptyResponse);
/// let err: FelliniError = provider_err.into();
/// assert!(format!("{}", err).contains("Provider Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FelliniErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text-generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Screenplay pipeline error
    #[from(ScreenplayError)]
    Screenplay(ScreenplayError),
    /// Run-workspace storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Fellini error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fellini_error::{FelliniResult, ConfigError};
///
/// fn might_fail() -> FelliniResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fellini Error: {}", _0)]
pub struct FelliniError(Box<FelliniErrorKind>);

impl FelliniError {
    /// Create a new error from a kind.
    pub fn new(kind: FelliniErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FelliniErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FelliniErrorKind
impl<T> From<T> for FelliniError
where
    T: Into<FelliniErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fellini operations.
///
/// # Examples
///
/// ```
/// use fellini_error::{FelliniResult, StorageError, StorageErrorKind};
///
/// fn archive() -> FelliniResult<String> {
///     Err(StorageError::new(StorageErrorKind::NoActiveRun))?
/// }
/// ```
pub type FelliniResult<T> = std::result::Result<T, FelliniError>;
