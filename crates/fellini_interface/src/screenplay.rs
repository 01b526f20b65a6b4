//! Execution result types for screenplay generation.

use fellini_core::Timestamp;
use serde::{Deserialize, Serialize};

/// One completed scene in the registry.
///
/// Scenes are indexed from 1 in generation order. The registry grows
/// monotonically during a run and is read-only once the run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Position in the screenplay, starting at 1
    pub index: usize,
    /// The detailed scene text
    pub script: String,
    /// Estimated screen-time duration
    pub duration: Timestamp,
    /// Visual prompt describing the scene's key image
    pub image_prompt: String,
}

/// Complete result of one screenplay generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenplayExecution {
    /// The story idea that seeded the run
    pub story_idea: String,
    /// Requested film length in minutes
    pub length_minutes: u32,
    /// Creative direction established for the film
    pub creative_direction: String,
    /// Character profiles
    pub characters: String,
    /// Plot description
    pub plot: String,
    /// Scene registry in index order
    pub scenes: Vec<SceneRecord>,
    /// The assembled screenplay document
    pub document: String,
}

impl ScreenplayExecution {
    /// Total estimated runtime across all scenes, in seconds.
    pub fn total_duration_seconds(&self) -> u64 {
        self.scenes.iter().map(|s| s.duration.total_seconds()).sum()
    }
}
