//! The prompt agent: one named, stateless unit per pipeline stage.

use crate::GenerationConfig;
use fellini_core::GenerateRequest;
use fellini_error::{FelliniResult, ProviderError, ProviderErrorKind};
use fellini_interface::{FelliniDriver, TranscriptRecord, TranscriptSink};

/// A stateless wrapper around a single-turn request to the text-generation
/// provider.
///
/// Every higher-level stage is an instance of this with a fixed system
/// instruction template. Each call emits one outgoing and one incoming
/// transcript record tagged with the agent's name and role label.
///
/// Inputs are deterministic, outputs are not (temperature above zero), and
/// nothing is cached: identical calls may produce different text.
pub struct PromptAgent<'a> {
    name: &'a str,
    role: &'a str,
    driver: &'a dyn FelliniDriver,
    sink: &'a dyn TranscriptSink,
    config: &'a GenerationConfig,
}

impl<'a> PromptAgent<'a> {
    /// Create an agent over the shared driver, sink, and generation settings.
    pub fn new(
        name: &'a str,
        role: &'a str,
        driver: &'a dyn FelliniDriver,
        sink: &'a dyn TranscriptSink,
        config: &'a GenerationConfig,
    ) -> Self {
        Self {
            name,
            role,
            driver,
            sink,
            config,
        }
    }

    /// Name of this agent.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Role label of this agent.
    pub fn role(&self) -> &str {
        self.role
    }

    /// Send one system/user instruction pair and return the generated text.
    ///
    /// # Errors
    ///
    /// Propagates any provider failure unchanged; a blank response is
    /// reported as `ProviderErrorKind::EmptyResponse`. No retries at this
    /// seam.
    #[tracing::instrument(skip_all, fields(agent = self.name))]
    pub async fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> FelliniResult<String> {
        self.sink
            .record(TranscriptRecord::outgoing(self.name, self.role, user_instruction));

        let mut request = GenerateRequest::single_turn(system_instruction, user_instruction);
        request.temperature = Some(*self.config.temperature());
        request.max_tokens = *self.config.max_tokens();
        request.model = self.config.model().clone();

        let response = self.driver.generate(&request).await?;
        if response.text.trim().is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into());
        }

        self.sink
            .record(TranscriptRecord::incoming(self.name, self.role, &response.text));
        Ok(response.text)
    }
}
