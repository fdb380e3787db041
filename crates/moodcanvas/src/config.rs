//! Layered TOML configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`moodcanvas.toml` compiled into the binary)
//! 2. `~/.config/moodcanvas/moodcanvas.toml`
//! 3. `./moodcanvas.toml`
//! 4. An explicit file passed by the caller
//!
//! Every file but the explicit one is optional. The access token never lives
//! here.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use moodcanvas_analysis::{AnalyzerSettings, DEFAULT_FEEDBACK_LANGUAGE};
use moodcanvas_core::Credential;
use moodcanvas_error::{BuilderError, ConfigError, MoodcanvasError, MoodcanvasResult};
use moodcanvas_fallback::RetryPolicy;
use moodcanvas_models::{HuggingFaceEndpoints, HuggingFaceGateway};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../moodcanvas.toml");

/// Model identifiers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Chat model used for diary analysis
    pub text_model: String,
    /// Preferred image model, always tried first
    pub image_model: String,
    /// Standard image models tried after the preferred one
    #[serde(default)]
    pub fallback_image_models: Vec<String>,
}

/// Per-model retry budget and backoff, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Retries after the first attempt, per model
    pub max_retries_per_model: u32,
    /// Linear wait increment
    pub backoff_step_secs: f64,
    /// Upper bound of the random extra wait
    pub max_jitter_secs: f64,
}

impl RetryConfig {
    /// The retry policy these settings describe.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::from_secs(
            self.max_retries_per_model,
            self.backoff_step_secs,
            self.max_jitter_secs,
        )
    }
}

/// Hugging Face endpoints and chat sampling settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Chat-completion URL
    pub chat_url: String,
    /// Base URL for image models
    pub image_base_url: String,
    /// Account lookup URL
    pub whoami_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl GatewayConfig {
    /// Endpoint settings for [`HuggingFaceGateway`].
    pub fn endpoints(&self) -> MoodcanvasResult<HuggingFaceEndpoints> {
        HuggingFaceEndpoints::builder()
            .chat_url(self.chat_url.as_str())
            .image_base_url(self.image_base_url.as_str())
            .whoami_url(self.whoami_url.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| MoodcanvasError::from(BuilderError::from(e.to_string())))
    }
}

/// Analysis wording.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Language of the emotion label and feedback
    #[serde(default = "default_feedback_language")]
    pub feedback_language: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            feedback_language: default_feedback_language(),
        }
    }
}

fn default_feedback_language() -> String {
    DEFAULT_FEEDBACK_LANGUAGE.to_string()
}

/// Top-level Moodcanvas configuration.
///
/// # Example
///
/// ```
/// use moodcanvas::MoodcanvasConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MoodcanvasConfig::bundled()?;
/// assert_eq!(config.models.image_model, "runwayml/stable-diffusion-v1-5");
/// assert_eq!(config.retry.max_retries_per_model, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoodcanvasConfig {
    /// Model identifiers
    pub models: ModelsConfig,
    /// Retry budget
    pub retry: RetryConfig,
    /// Gateway settings
    pub gateway: GatewayConfig,
    /// Analysis wording
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl MoodcanvasConfig {
    /// The bundled defaults alone.
    pub fn bundled() -> MoodcanvasResult<Self> {
        finish(defaults())
    }

    /// Loads configuration with the full precedence chain.
    ///
    /// `explicit`, when given, must exist; the other user files are skipped
    /// when absent.
    #[instrument(skip_all, fields(explicit = ?explicit.map(Path::display)))]
    pub fn load(explicit: Option<&Path>) -> MoodcanvasResult<Self> {
        debug!("Loading configuration: explicit > current dir > home dir > bundled defaults");

        let mut builder = defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/moodcanvas/moodcanvas.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("moodcanvas").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        finish(builder)
    }

    /// Loads the bundled defaults overridden by one file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MoodcanvasResult<Self> {
        debug!("Loading configuration from file");
        finish(
            defaults().add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
        )
    }

    /// Loads the bundled defaults overridden by TOML text.
    pub fn from_toml_str(toml: &str) -> MoodcanvasResult<Self> {
        finish(defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Analyzer settings derived from the gateway and analysis sections.
    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            max_tokens: self.gateway.max_tokens,
            temperature: self.gateway.temperature,
            feedback_language: self.analysis.feedback_language.clone(),
        }
    }
}

/// Builds the Hugging Face gateway described by `config`.
///
/// A missing credential still yields a gateway; it reports not ready and
/// every call fails fast.
pub fn build_gateway(
    config: &MoodcanvasConfig,
    credential: Option<Credential>,
) -> MoodcanvasResult<HuggingFaceGateway> {
    HuggingFaceGateway::new(credential, config.gateway.endpoints()?)
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> MoodcanvasResult<MoodcanvasConfig> {
    builder
        .build()
        .map_err(|e| {
            MoodcanvasError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            MoodcanvasError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
