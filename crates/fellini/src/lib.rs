//! Fellini - LLM-driven screenplay generation.
//!
//! Fellini orchestrates a sequence of large-language-model calls into a
//! complete screenplay of a target runtime length: creative direction,
//! characters, plot, a scene breakdown, detailed scenes with per-scene
//! screen-time estimates and image prompts, and a pacing loop that keeps
//! writing scenes until the estimated runtime reaches 90% of the requested
//! length.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fellini::{Director, FelliniConfig, FileSystemWorkspace, GeminiClient, TracingSink};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FelliniConfig::load()?;
//!     let driver = GeminiClient::new()?;
//!     let store = FileSystemWorkspace::new(config.data_dir())?;
//!     let director = Director::new(driver, store, Arc::new(TracingSink), config);
//!
//!     let execution = director
//!         .execute("A lighthouse keeper discovers a message in a bottle", 5)
//!         .await?;
//!     println!("{}", execution.document);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fellini is organized as a workspace with focused crates:
//!
//! - `fellini_core` - Core data types (messages, requests, timestamps)
//! - `fellini_interface` - Driver and transcript-sink traits
//! - `fellini_error` - Error types
//! - `fellini_models` - LLM provider implementations
//! - `fellini_storage` - Per-run artifact storage
//! - `fellini_screenplay` - The generation pipeline
//!
//! This crate (`fellini`) re-exports everything for convenience and ships
//! the `fellini` CLI binary.

// Re-export the workspace crates
pub use fellini_core::*;
pub use fellini_error::*;
pub use fellini_interface::*;
pub use fellini_models::GeminiClient;
pub use fellini_screenplay::{
    Director, FelliniConfig, GenerationConfig, PacingConfig, PacingTracker, PromptAgent,
    TARGET_MARGIN, assemble, split_scenes,
};
pub use fellini_storage::{FileSystemWorkspace, ScreenplayStore};
