//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a generation request.
///
/// # Examples
///
/// ```
/// use fellini_core::Role;
///
/// let system = Role::System;
/// let user = Role::User;
/// assert_ne!(system, user);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages carry the fixed stage instruction
    System,
    /// User messages carry the per-call instruction and context
    User,
    /// Assistant messages are from the model
    Assistant,
}
