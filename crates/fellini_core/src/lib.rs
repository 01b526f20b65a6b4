//! Core data types for the Fellini screenplay pipeline.
//!
//! This crate provides the foundation data types used across all Fellini
//! interfaces: conversation roles and messages, generation requests and
//! responses, and the `MM:SS` screen-time timestamp.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod timestamp;

pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use timestamp::{ParseTimestampError, Timestamp};
