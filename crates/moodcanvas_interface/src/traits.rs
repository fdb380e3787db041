//! Inference gateway traits.

use async_trait::async_trait;
use moodcanvas_core::{ChatRequest, ImageArtifact};
use moodcanvas_error::MoodcanvasResult;

/// Core trait every inference backend implements.
pub trait InferenceGateway: Send + Sync {
    /// Provider name (e.g., "huggingface", "local").
    fn provider_name(&self) -> &'static str;

    /// Whether calls can be attempted at all.
    ///
    /// Remote gateways report `false` when no valid credential is configured;
    /// local ones when the model is not provisioned. Callers short-circuit
    /// instead of issuing a call that cannot succeed.
    fn is_ready(&self) -> bool;
}

/// Chat-completion capability used for diary analysis.
#[async_trait]
pub trait ChatCompletion: InferenceGateway {
    /// Sends the conversation and returns the assistant's reply text.
    async fn chat_completion(&self, request: &ChatRequest) -> MoodcanvasResult<String>;
}

/// Text-to-image capability driven by the fallback controller.
#[async_trait]
pub trait TextToImage: InferenceGateway {
    /// Generates one image for `prompt` with the named model.
    async fn text_to_image(&self, prompt: &str, model: &str) -> MoodcanvasResult<ImageArtifact>;
}

/// Account lookup, used to check that a token is accepted.
#[async_trait]
pub trait AccountInfo: InferenceGateway {
    /// Returns the account name the credential belongs to.
    async fn whoami(&self) -> MoodcanvasResult<String>;
}

#[async_trait]
impl<T: ChatCompletion + ?Sized> ChatCompletion for std::sync::Arc<T> {
    async fn chat_completion(&self, request: &ChatRequest) -> MoodcanvasResult<String> {
        (**self).chat_completion(request).await
    }
}

#[async_trait]
impl<T: TextToImage + ?Sized> TextToImage for std::sync::Arc<T> {
    async fn text_to_image(&self, prompt: &str, model: &str) -> MoodcanvasResult<ImageArtifact> {
        (**self).text_to_image(prompt, model).await
    }
}

impl<T: InferenceGateway + ?Sized> InferenceGateway for std::sync::Arc<T> {
    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
