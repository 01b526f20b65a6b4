//! Trait definitions for the Fellini screenplay pipeline.
//!
//! This crate provides the seams between the pipeline core and its external
//! collaborators: the text-generation provider ([`FelliniDriver`]), the
//! observability stream ([`TranscriptSink`]), and the execution result types
//! shared across the workspace.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod screenplay;
mod traits;
mod transcript;

pub use screenplay::{SceneRecord, ScreenplayExecution};
pub use traits::FelliniDriver;
pub use transcript::{Direction, MemorySink, TracingSink, TranscriptRecord, TranscriptSink};
