//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A single generation request.
///
/// # Examples
///
/// ```
/// use fellini_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello!")],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: Some("gemini-2.0-flash-lite".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Build the single-turn request shape used by every pipeline stage:
    /// one system instruction followed by one user instruction.
    pub fn single_turn(
        system_instruction: impl Into<String>,
        user_instruction: impl Into<String>,
    ) -> Self {
        Self {
            messages: vec![
                Message::system(system_instruction),
                Message::user(user_instruction),
            ],
            ..Default::default()
        }
    }
}

/// The generated model output.
///
/// # Examples
///
/// ```
/// use fellini_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     text: "FADE IN:".to_string(),
/// };
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}
