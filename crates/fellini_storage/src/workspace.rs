//! Filesystem-backed run workspace.
//!
//! Runs live under a data root as timestamped directories:
//!
//! ```text
//! data/
//! ├── story_20250110_143055/
//! │   ├── scenes/
//! │   │   ├── scene_01.txt
//! │   │   └── scene_02.txt
//! │   └── screenplay_package.txt
//! └── story_20250110_143055.zip   (after archiving)
//! ```

use crate::ScreenplayStore;
use chrono::Local;
use fellini_error::{FelliniResult, StorageError, StorageErrorKind};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Filesystem storage backend for screenplay runs.
///
/// Tracks at most one active run. Scene and package writes implicitly start
/// a run when none is active; archiving or clearing without one is the
/// recoverable `NoActiveRun` condition.
#[derive(Debug)]
pub struct FileSystemWorkspace {
    data_dir: PathBuf,
    current: Mutex<Option<PathBuf>>,
}

impl FileSystemWorkspace {
    /// Open a workspace rooted at `data_dir`, creating it if missing.
    #[tracing::instrument(skip(data_dir))]
    pub fn new(data_dir: impl Into<PathBuf>) -> FelliniResult<Self> {
        let data_dir = data_dir.into();

        std::fs::create_dir_all(&data_dir).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                data_dir.display(),
                e
            )))
        })?;

        tracing::info!(path = %data_dir.display(), "Opened screenplay workspace");
        Ok(Self {
            data_dir,
            current: Mutex::new(None),
        })
    }

    /// Directory holding all runs.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn scene_file_name(index: usize) -> String {
        format!("scene_{:02}.txt", index)
    }

    fn create_run_dir(&self) -> Result<PathBuf, StorageError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let mut run_dir = self.data_dir.join(format!("story_{stamp}"));
        let mut attempt = 1;
        while run_dir.exists() {
            attempt += 1;
            run_dir = self.data_dir.join(format!("story_{stamp}_{attempt}"));
        }

        std::fs::create_dir_all(run_dir.join("scenes")).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                run_dir.display(),
                e
            )))
        })?;
        Ok(run_dir)
    }

    /// Run directory currently in effect, creating one if needed.
    fn ensure_run(&self) -> Result<PathBuf, StorageError> {
        let mut current = self.current.lock().unwrap();
        if let Some(dir) = current.as_ref() {
            return Ok(dir.clone());
        }
        let dir = self.create_run_dir()?;
        *current = Some(dir.clone());
        Ok(dir)
    }
}

#[async_trait::async_trait]
impl ScreenplayStore for FileSystemWorkspace {
    #[tracing::instrument(skip(self))]
    async fn begin_run(&self) -> FelliniResult<PathBuf> {
        let dir = self.create_run_dir()?;
        *self.current.lock().unwrap() = Some(dir.clone());
        tracing::info!(run = %dir.display(), "Started new run");
        Ok(dir)
    }

    #[tracing::instrument(skip(self, script), fields(size = script.len()))]
    async fn save_scene(&self, index: usize, script: &str) -> FelliniResult<PathBuf> {
        let run = self.ensure_run()?;
        let path = run.join("scenes").join(Self::scene_file_name(index));

        tokio::fs::write(&path, script).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %path.display(), "Saved scene");
        Ok(path)
    }

    #[tracing::instrument(skip(self, document), fields(size = document.len()))]
    async fn save_package(&self, document: &str) -> FelliniResult<PathBuf> {
        let run = self.ensure_run()?;
        let path = run.join("screenplay_package.txt");

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, document).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Saved screenplay package");
        Ok(path)
    }

    #[tracing::instrument(skip(self))]
    async fn archive_run(&self) -> FelliniResult<PathBuf> {
        let run = self
            .active_run()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NoActiveRun))?;
        let zip_path = run.with_extension("zip");

        let run_dir = run.clone();
        let archive_path = zip_path.clone();
        tokio::task::spawn_blocking(move || zip_directory(&run_dir, &archive_path))
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Archive(e.to_string())))??;

        tracing::info!(archive = %zip_path.display(), "Archived run");
        Ok(zip_path)
    }

    #[tracing::instrument(skip(self))]
    async fn clear_run(&self) -> FelliniResult<()> {
        let run = {
            let mut current = self.current.lock().unwrap();
            current
                .take()
                .ok_or_else(|| StorageError::new(StorageErrorKind::NoActiveRun))?
        };

        tokio::fs::remove_dir_all(&run).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "remove {}: {}",
                run.display(),
                e
            )))
        })?;

        tracing::info!(run = %run.display(), "Cleared run");
        Ok(())
    }

    fn active_run(&self) -> Option<PathBuf> {
        self.current.lock().unwrap().clone()
    }
}

/// Write every file under `run_dir` into a zip at `zip_path`, with entry
/// names relative to the run directory. Entries are sorted so identical runs
/// produce identical archives.
fn zip_directory(run_dir: &Path, zip_path: &Path) -> Result<(), StorageError> {
    let archive_err =
        |e: &dyn std::fmt::Display| StorageError::new(StorageErrorKind::Archive(e.to_string()));

    let file = std::fs::File::create(zip_path).map_err(|e| archive_err(&e))?;
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    let mut pending = vec![run_dir.to_path_buf()];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| archive_err(&e))? {
            let path = entry.map_err(|e| archive_err(&e))?.path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();

    for path in files {
        let name = path
            .strip_prefix(run_dir)
            .map_err(|e| archive_err(&e))?
            .to_string_lossy()
            .into_owned();
        writer.start_file(name, options).map_err(|e| archive_err(&e))?;
        let data = std::fs::read(&path).map_err(|e| archive_err(&e))?;
        writer.write_all(&data).map_err(|e| archive_err(&e))?;
    }

    writer.finish().map_err(|e| archive_err(&e))?;
    Ok(())
}
