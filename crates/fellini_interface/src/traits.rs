//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use fellini_core::{GenerateRequest, GenerateResponse};
use fellini_error::FelliniResult;

/// Core trait that all text-generation backends must implement.
///
/// This is the single capability the pipeline requires of a provider:
/// a stateless request/response generation call. There are no retries at
/// this seam; a failure propagates to the caller and aborts the active run.
#[async_trait]
pub trait FelliniDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> FelliniResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str;
}
