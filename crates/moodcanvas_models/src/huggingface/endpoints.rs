//! Endpoint configuration for the Hugging Face gateway.

use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Default chat-completion endpoint (OpenAI-compatible router).
pub const DEFAULT_CHAT_URL: &str = "https://router.huggingface.co/v1/chat/completions";

/// Default base URL for text-to-image models; the model id is appended.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Default account lookup endpoint.
pub const DEFAULT_WHOAMI_URL: &str = "https://huggingface.co/api/whoami-v2";

/// Where the gateway sends requests and how long it waits for each.
///
/// # Examples
///
/// ```
/// use moodcanvas_models::HuggingFaceEndpoints;
/// use std::time::Duration;
///
/// let endpoints = HuggingFaceEndpoints::builder()
///     .image_base_url("http://localhost:8080/models")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(endpoints.image_url("org/model"), "http://localhost:8080/models/org/model");
/// assert!(endpoints.chat_url().starts_with("https://router.huggingface.co"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct HuggingFaceEndpoints {
    /// Chat-completion URL
    #[builder(default = "DEFAULT_CHAT_URL.to_string()")]
    chat_url: String,
    /// Base URL for image models
    #[builder(default = "DEFAULT_IMAGE_BASE_URL.to_string()")]
    image_base_url: String,
    /// Account lookup URL
    #[builder(default = "DEFAULT_WHOAMI_URL.to_string()")]
    whoami_url: String,
    /// Per-request timeout
    #[builder(default = "Duration::from_secs(120)")]
    timeout: Duration,
}

impl HuggingFaceEndpoints {
    /// Creates a new builder for `HuggingFaceEndpoints`.
    pub fn builder() -> HuggingFaceEndpointsBuilder {
        HuggingFaceEndpointsBuilder::default()
    }

    /// Full URL for a text-to-image model.
    pub fn image_url(&self, model: &str) -> String {
        format!("{}/{}", self.image_base_url.trim_end_matches('/'), model)
    }
}

impl Default for HuggingFaceEndpoints {
    fn default() -> Self {
        Self {
            chat_url: DEFAULT_CHAT_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            whoami_url: DEFAULT_WHOAMI_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}
