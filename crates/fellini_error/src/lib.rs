//! Error types for the Fellini library.
//!
//! This crate provides the foundation error types used throughout the Fellini
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fellini_error::{FelliniResult, ProviderError, ProviderErrorKind};
//!
//! fn call_provider() -> FelliniResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::EmptyResponse))?
//! }
//!
//! match call_provider() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod provider;
mod screenplay;
mod storage;

pub use config::ConfigError;
pub use error::{FelliniError, FelliniErrorKind, FelliniResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use screenplay::{ScreenplayError, ScreenplayErrorKind};
pub use storage::{StorageError, StorageErrorKind};
