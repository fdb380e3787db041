//! Sequential multi-model image generation.

use crate::policy::RetryPolicy;
use moodcanvas_core::{AttemptOutcome, FallbackResult, ImageCandidateList, StatusEvent};
use moodcanvas_interface::{StatusSink, TextToImage};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Drives one image request through a ranked list of candidate models.
///
/// Models are tried in order. Each gets [`RetryPolicy::total_attempts`]
/// attempts with a cancellable wait between them; the first image wins and
/// no later model is contacted. Gateway errors are never classified here:
/// every failure is retried the same way.
#[derive(Debug, Clone)]
pub struct FallbackController<G> {
    gateway: G,
    policy: RetryPolicy,
}

/// Control flow out of a single model's attempts.
enum ModelOutcome {
    Generated(FallbackResult),
    Exhausted,
    Cancelled,
}

impl<G: TextToImage> FallbackController<G> {
    /// Creates a controller with the default retry policy.
    pub fn new(gateway: G) -> Self {
        Self::with_policy(gateway, RetryPolicy::default())
    }

    /// Creates a controller with an explicit retry policy.
    pub fn with_policy(gateway: G, policy: RetryPolicy) -> Self {
        Self { gateway, policy }
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The active retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generates an image for `prompt`, falling back across `candidates`.
    ///
    /// A blank prompt, an empty candidate list or an unready gateway returns
    /// [`FallbackResult::exhausted`] without calling the gateway.
    pub async fn generate_with_fallback(
        &self,
        prompt: &str,
        candidates: &ImageCandidateList,
        status: Option<&dyn StatusSink>,
    ) -> FallbackResult {
        let cancel = CancellationToken::new();
        self.generate_with_cancel(prompt, candidates, status, &cancel)
            .await
    }

    /// Like [`generate_with_fallback`](Self::generate_with_fallback), stopping
    /// early once `cancel` fires.
    ///
    /// The token is checked before every gateway call and raced against the
    /// call and every backoff wait.
    #[instrument(
        skip(self, prompt, candidates, status, cancel),
        fields(
            provider = self.gateway.provider_name(),
            candidates = candidates.len(),
            prompt_len = prompt.len()
        )
    )]
    pub async fn generate_with_cancel(
        &self,
        prompt: &str,
        candidates: &ImageCandidateList,
        status: Option<&dyn StatusSink>,
        cancel: &CancellationToken,
    ) -> FallbackResult {
        if prompt.trim().is_empty() {
            debug!("Image prompt is blank, skipping generation");
            return FallbackResult::exhausted();
        }
        if candidates.is_empty() {
            debug!("No candidate models, skipping generation");
            return FallbackResult::exhausted();
        }
        if !self.gateway.is_ready() {
            warn!("Gateway is not ready, skipping generation");
            return FallbackResult::exhausted();
        }

        for model in candidates.iter() {
            emit(status, StatusEvent::running(format!("Trying model {}", model)));

            match self.try_model(prompt, model, status, cancel).await {
                ModelOutcome::Generated(result) => return result,
                ModelOutcome::Cancelled => {
                    info!(model, "Image generation cancelled");
                    emit(status, StatusEvent::error("Image generation cancelled"));
                    return FallbackResult::exhausted();
                }
                ModelOutcome::Exhausted => {
                    warn!(
                        model,
                        attempts = self.policy.total_attempts(),
                        "Model exhausted, moving to next candidate"
                    );
                    emit(
                        status,
                        StatusEvent::error(format!(
                            "Model {} failed after {} attempts, moving to next model",
                            model,
                            self.policy.total_attempts()
                        )),
                    );
                }
            }
        }

        error!(candidates = candidates.len(), "All candidate models failed");
        emit(status, StatusEvent::error("All candidate models failed"));
        FallbackResult::exhausted()
    }

    async fn try_model(
        &self,
        prompt: &str,
        model: &str,
        status: Option<&dyn StatusSink>,
        cancel: &CancellationToken,
    ) -> ModelOutcome {
        let total = self.policy.total_attempts();

        for attempt in 0..total {
            if cancel.is_cancelled() {
                return ModelOutcome::Cancelled;
            }

            let outcome = tokio::select! {
                _ = cancel.cancelled() => return ModelOutcome::Cancelled,
                outcome = self.attempt(prompt, model, attempt) => outcome,
            };

            let reason = match outcome {
                AttemptOutcome::Image(image) => {
                    info!(model, attempt, bytes = image.len(), "Image generated");
                    emit(
                        status,
                        StatusEvent::complete(format!("Image generated with model {}", model)),
                    );
                    return ModelOutcome::Generated(FallbackResult::success(image, model));
                }
                AttemptOutcome::Failed(reason) => reason,
            };

            if !self.policy.has_retry_after(attempt) {
                debug!(model, attempt, reason = %reason, "Last attempt for model failed");
                break;
            }

            let wait = self.policy.jittered_delay(attempt);
            emit(
                status,
                StatusEvent::running(format!(
                    "Model {} failed (attempt {}/{}), retrying in {:.1}s",
                    model,
                    attempt + 1,
                    total,
                    wait.as_secs_f64()
                )),
            );
            debug!(model, attempt, wait_ms = wait.as_millis() as u64, "Backing off");

            tokio::select! {
                _ = cancel.cancelled() => return ModelOutcome::Cancelled,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        ModelOutcome::Exhausted
    }

    async fn attempt(&self, prompt: &str, model: &str, attempt: u32) -> AttemptOutcome {
        match self.gateway.text_to_image(prompt, model).await {
            Ok(image) if image.is_empty() => {
                warn!(model, attempt, "Model returned an empty image");
                AttemptOutcome::Failed("image response was empty".to_string())
            }
            Ok(image) => AttemptOutcome::Image(image),
            Err(e) => {
                let transient = e.gateway_kind().map(|k| k.is_transient()).unwrap_or(false);
                warn!(model, attempt, transient, error = %e, "Image attempt failed");
                AttemptOutcome::Failed(e.detail())
            }
        }
    }
}

fn emit(status: Option<&dyn StatusSink>, event: StatusEvent) {
    debug!(state = %event.state(), message = %event.message(), "Status");
    if let Some(sink) = status {
        sink.on_status(&event);
    }
}
