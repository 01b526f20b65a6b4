//! Pipeline configuration.
//!
//! Configuration is TOML-based with a precedence system:
//! - Bundled defaults (include_str! from fellini.toml)
//! - User overrides (~/.config/fellini/fellini.toml, then ./fellini.toml)

use config::{Config, File, FileFormat};
use fellini_error::{ConfigError, FelliniResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

fn default_temperature() -> f32 {
    0.7
}

fn default_data_dir() -> String {
    "data".to_string()
}

/// Generation parameters applied to every stage request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct GenerationConfig {
    /// Model identifier, or None for the driver's default model
    #[serde(default)]
    model: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,

    /// Maximum tokens per response, or None for the provider default
    #[serde(default)]
    max_tokens: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

/// Pacing-loop configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize, derive_getters::Getters)]
pub struct PacingConfig {
    /// Optional cap on gap-filling scenes per run.
    ///
    /// The gap-filling loop has no minimum-progress guarantee: a provider
    /// that keeps estimating near-zero durations would never reach the
    /// runtime threshold. Setting a cap bounds that risk. Unset (the
    /// default) preserves the unbounded loop.
    #[serde(default)]
    max_gap_scenes: Option<u32>,
}

/// Top-level Fellini configuration.
///
/// # Examples
///
/// ```no_run
/// use fellini_screenplay::FelliniConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FelliniConfig::load()?;
/// println!("writing runs under {}", config.data_dir());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct FelliniConfig {
    /// Root directory for per-run output
    #[serde(default = "default_data_dir")]
    data_dir: String,

    /// Generation parameters
    #[serde(default)]
    generation: GenerationConfig,

    /// Pacing-loop parameters
    #[serde(default)]
    pacing: PacingConfig,
}

impl Default for FelliniConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            generation: GenerationConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl FelliniConfig {
    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (fellini.toml shipped with the workspace)
    /// 2. User config in home directory (~/.config/fellini/fellini.toml)
    /// 3. User config in current directory (./fellini.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> FelliniResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../fellini.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fellini/fellini.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("fellini").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FelliniResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Builder method to override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = Some(model.into());
        self
    }

    /// Builder method to override the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Builder method to cap the gap-filling loop.
    pub fn with_max_gap_scenes(mut self, max_gap_scenes: u32) -> Self {
        self.pacing.max_gap_scenes = Some(max_gap_scenes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bundled_config() {
        let config = FelliniConfig::default();
        assert_eq!(config.data_dir(), "data");
        assert_eq!(*config.generation().temperature(), 0.7);
        assert_eq!(*config.generation().model(), None);
        assert_eq!(*config.pacing().max_gap_scenes(), None);
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: FelliniConfig = toml::from_str(
            r#"
            data_dir = "/tmp/stories"

            [generation]
            model = "gemini-2.5-flash"

            [pacing]
            max_gap_scenes = 12
            "#,
        )
        .expect("valid config");

        assert_eq!(config.data_dir(), "/tmp/stories");
        assert_eq!(
            config.generation().model().as_deref(),
            Some("gemini-2.5-flash")
        );
        // Unspecified fields keep their defaults
        assert_eq!(*config.generation().temperature(), 0.7);
        assert_eq!(*config.pacing().max_gap_scenes(), Some(12));
    }

    #[test]
    fn builder_overrides() {
        let config = FelliniConfig::default()
            .with_model("gemini-2.5-pro")
            .with_data_dir("elsewhere")
            .with_max_gap_scenes(3);

        assert_eq!(config.generation().model().as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.data_dir(), "elsewhere");
        assert_eq!(*config.pacing().max_gap_scenes(), Some(3));
    }
}
