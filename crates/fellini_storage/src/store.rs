//! Storage trait definition.

use fellini_error::FelliniResult;
use std::path::PathBuf;

/// Trait for pluggable per-run artifact storage.
///
/// The `scene_<NN>` naming and ordering convention is load-bearing: scenes
/// are persisted one file per registry index, zero-padded to two digits, in
/// strictly increasing order, and the assembled package renders them in that
/// same order.
#[async_trait::async_trait]
pub trait ScreenplayStore: Send + Sync {
    /// Start a fresh run and return its directory.
    ///
    /// Any previously active run is left on disk untouched.
    async fn begin_run(&self) -> FelliniResult<PathBuf>;

    /// Persist one detailed scene under the active run.
    ///
    /// Starts a run implicitly if none is active. Returns the path of the
    /// written artifact.
    async fn save_scene(&self, index: usize, script: &str) -> FelliniResult<PathBuf>;

    /// Persist the assembled screenplay package under the active run.
    ///
    /// Starts a run implicitly if none is active.
    async fn save_package(&self, document: &str) -> FelliniResult<PathBuf>;

    /// Bundle the active run's directory into a single zip archive.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NoActiveRun` when no run is in progress;
    /// callers should treat this as "nothing to save", not a failure.
    async fn archive_run(&self) -> FelliniResult<PathBuf>;

    /// Delete the active run's directory and forget it.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NoActiveRun` when no run is in progress.
    async fn clear_run(&self) -> FelliniResult<()>;

    /// Directory of the run currently in progress, if any.
    fn active_run(&self) -> Option<PathBuf>;
}
