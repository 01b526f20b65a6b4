//! Google Gemini API implementation.
//!
//! This module provides a client for the Google Gemini API with support for:
//! - Per-request model selection (different requests can use different models)
//! - Client pooling with lazy initialization (one client per model)
//! - Thread-safe concurrent access
//!
//! # Example
//!
//! ```no_run
//! use fellini_models::GeminiClient;
//! use fellini_core::GenerateRequest;
//! use fellini_interface::FelliniDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let request = GenerateRequest::single_turn(
//!     "You are a professional screenwriter.",
//!     "Write a one-line scene heading.",
//! );
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use fellini_core::{GenerateRequest, GenerateResponse, Role};
use fellini_error::{FelliniResult, ProviderError, ProviderErrorKind};
use fellini_interface::FelliniDriver;

use super::GeminiResult;

/// Client for the Google Gemini API with per-model client pooling.
///
/// The client maintains a cache of model-specific Gemini clients, created
/// lazily on first use for each model. When a request specifies a model
/// (via `GenerateRequest.model`), the pool either returns the existing
/// client for that model or creates one on demand.
///
/// There is no retry and no rate limiting here: the pipeline issues one
/// request at a time and a failed call aborts the run.
pub struct GeminiClient {
    /// Cache of model-specific clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when req.model is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().unwrap().len();
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    /// Defaults to the Gemini 2.0 Flash Lite model.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> FelliniResult<Self> {
        Self::with_default_model("gemini-2.0-flash-lite")
    }

    /// Create a new Gemini client with an explicit default model.
    ///
    /// Individual requests can still override the model via
    /// `GenerateRequest.model`.
    #[instrument(name = "gemini_client_with_default_model", skip(model))]
    pub fn with_default_model(model: impl Into<String>) -> FelliniResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ProviderError::new(ProviderErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: model.into(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the Gemini API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or lazily create the pooled client for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().unwrap();
        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let client = Gemini::with_model(&self.api_key, Self::model_name_to_enum(model_name))
            .map_err(|e| ProviderError::new(ProviderErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Internal generate method that returns provider-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model_name = req.model.as_deref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                Role::System => {
                    // Gemini uses a separate system prompt
                    system_prompt = Some(msg.content.clone());
                }
                Role::User => {
                    builder = builder.with_user_message(&msg.content);
                }
                Role::Assistant => {
                    builder = builder.with_model_message(&msg.content);
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        Ok(GenerateResponse {
            text: response.text(),
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured ProviderError
    /// with HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> ProviderError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            ProviderError::new(ProviderErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            ProviderError::new(ProviderErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl FelliniDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> FelliniResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_extraction() {
        assert_eq!(
            GeminiClient::extract_status_code("bad response from server; code 503; description"),
            Some(503)
        );
        assert_eq!(GeminiClient::extract_status_code("connection refused"), None);
    }

    #[test]
    fn custom_models_get_prefixed() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.0-flash"),
            Model::Custom(name) if name == "models/gemini-2.0-flash"
        ));
        assert!(matches!(
            GeminiClient::model_name_to_enum("models/gemini-2.0-flash"),
            Model::Custom(name) if name == "models/gemini-2.0-flash"
        ));
    }
}
