//! Screenplay generation pipeline for Fellini.
//!
//! This crate orchestrates a fixed sequence of text-generation stages into a
//! complete screenplay of a target runtime length:
//!
//! 1. Creative direction for the film
//! 2. Character profiles
//! 3. Plot structure
//! 4. Scene-by-scene outline
//! 5. Per scene: detailed script, screen-time estimate, image prompt
//! 6. Gap-filling scenes until the accumulated runtime reaches 90% of target
//! 7. Assembly into a single screenplay document
//!
//! The pacing loop in step 6 is the heart of the pipeline: it keeps a
//! 1-indexed scene registry, sums estimated durations, and requests
//! additional scenes (informed of the current and target runtime) until the
//! threshold is met.
//!
//! # Example
//!
//! ```rust,ignore
//! use fellini_screenplay::{Director, FelliniConfig};
//! use fellini_models::GeminiClient;
//! use fellini_storage::FileSystemWorkspace;
//! use fellini_interface::TracingSink;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FelliniConfig::load()?;
//! let driver = GeminiClient::new()?;
//! let store = FileSystemWorkspace::new(config.data_dir())?;
//! let director = Director::new(driver, store, Arc::new(TracingSink), config);
//!
//! let execution = director
//!     .execute("A lighthouse keeper discovers a message in a bottle", 5)
//!     .await?;
//! println!("{}", execution.document);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod assembly;
mod config;
mod director;
mod pacing;
mod prompts;
mod splitter;

pub use agent::PromptAgent;
pub use assembly::assemble;
pub use config::{FelliniConfig, GenerationConfig, PacingConfig};
pub use director::Director;
pub use pacing::{PacingTracker, TARGET_MARGIN};
pub use splitter::split_scenes;
