//! Tests for the filesystem run workspace.

use fellini_error::{FelliniErrorKind, StorageErrorKind};
use fellini_storage::{FileSystemWorkspace, ScreenplayStore};
use tempfile::TempDir;

fn assert_no_active_run(err: fellini_error::FelliniError) {
    match err.kind() {
        FelliniErrorKind::Storage(e) => assert_eq!(e.kind, StorageErrorKind::NoActiveRun),
        other => panic!("expected NoActiveRun, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scene_naming_and_implicit_run() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    // No run has been started; saving a scene starts one implicitly
    assert!(workspace.active_run().is_none());
    let path = workspace.save_scene(1, "INT. LIGHTHOUSE - NIGHT").await.unwrap();

    assert_eq!(path.file_name().unwrap(), "scene_01.txt");
    assert_eq!(path.parent().unwrap().file_name().unwrap(), "scenes");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "INT. LIGHTHOUSE - NIGHT"
    );

    let run = workspace.active_run().unwrap();
    assert!(
        run.file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("story_")
    );

    // Indices render zero-padded in order
    let path2 = workspace.save_scene(12, "EXT. SHORE - DAY").await.unwrap();
    assert_eq!(path2.file_name().unwrap(), "scene_12.txt");
}

#[tokio::test]
async fn test_save_package() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    let run = workspace.begin_run().await.unwrap();
    let path = workspace.save_package("Title: A story...").await.unwrap();

    assert_eq!(path, run.join("screenplay_package.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Title: A story...");
    // No temp file left behind
    assert!(!run.join("screenplay_package.tmp").exists());
}

#[tokio::test]
async fn test_begin_run_starts_fresh_directory() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    let first = workspace.begin_run().await.unwrap();
    let second = workspace.begin_run().await.unwrap();

    assert_ne!(first, second);
    // Earlier run directory is left untouched
    assert!(first.exists());
    assert_eq!(workspace.active_run().unwrap(), second);
}

#[tokio::test]
async fn test_archive_bundles_run_contents() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    workspace.save_scene(1, "scene one").await.unwrap();
    workspace.save_scene(2, "scene two").await.unwrap();
    workspace.save_package("the package").await.unwrap();

    let zip_path = workspace.archive_run().await.unwrap();
    assert_eq!(zip_path.extension().unwrap(), "zip");

    let file = std::fs::File::open(&zip_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "scenes/scene_01.txt".to_string(),
            "scenes/scene_02.txt".to_string(),
            "screenplay_package.txt".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_archive_without_run_is_recoverable() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    let err = workspace.archive_run().await.unwrap_err();
    assert_no_active_run(err);
}

#[tokio::test]
async fn test_clear_removes_run() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = FileSystemWorkspace::new(temp_dir.path()).unwrap();

    let run = workspace.begin_run().await.unwrap();
    workspace.save_scene(1, "to be discarded").await.unwrap();

    workspace.clear_run().await.unwrap();
    assert!(!run.exists());
    assert!(workspace.active_run().is_none());

    // A second clear has nothing to remove
    let err = workspace.clear_run().await.unwrap_err();
    assert_no_active_run(err);
}
