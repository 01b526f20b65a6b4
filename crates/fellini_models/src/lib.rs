//! LLM provider integrations for Fellini.
//!
//! Currently a single backend: the Google Gemini API via [`GeminiClient`].
//! Every provider implements [`fellini_interface::FelliniDriver`], so the
//! pipeline core never names a concrete backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
