//! Google Gemini provider integration.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini-internal operations.
pub(crate) type GeminiResult<T> = Result<T, fellini_error::ProviderError>;
