//! Diary-to-image orchestration.

use crate::config::{ModelsConfig, MoodcanvasConfig};
use derive_getters::Getters;
use moodcanvas_analysis::DiaryAnalyzer;
use moodcanvas_core::{AnalysisRequest, AnalysisResult, FallbackResult, ImageCandidateList};
use moodcanvas_fallback::{CancellationToken, FallbackController};
use moodcanvas_interface::{ChatCompletion, StatusSink, TextToImage};
use tracing::{debug, info, instrument};

/// Analysis plus, when it was attempted, image generation.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Visualization {
    /// Outcome of the diary analysis
    analysis: AnalysisResult,
    /// Outcome of image generation; `None` when it was skipped
    image: Option<FallbackResult>,
}

impl Visualization {
    /// True when both the analysis and the image succeeded.
    pub fn is_complete(&self) -> bool {
        self.analysis.analysis().is_some()
            && self.image.as_ref().is_some_and(FallbackResult::is_success)
    }

    /// Consumes the visualization.
    pub fn into_parts(self) -> (AnalysisResult, Option<FallbackResult>) {
        (self.analysis, self.image)
    }
}

/// Candidate image models: the preferred one first, then the configured
/// fallbacks without duplicates.
///
/// ```
/// use moodcanvas::{MoodcanvasConfig, candidate_models};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MoodcanvasConfig::bundled()?;
/// let list = candidate_models(&config.models, Some("prompthero/openjourney"));
/// assert_eq!(list.preferred(), Some("prompthero/openjourney"));
/// assert_eq!(list.len(), config.models.fallback_image_models.len());
/// # Ok(())
/// # }
/// ```
pub fn candidate_models(models: &ModelsConfig, preferred_override: Option<&str>) -> ImageCandidateList {
    let preferred = preferred_override
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(models.image_model.as_str());
    ImageCandidateList::with_preferred(preferred, &models.fallback_image_models)
}

/// Runs diary analysis, then image generation for the resulting prompt.
pub struct DiaryVisualizer<G> {
    analyzer: DiaryAnalyzer<G>,
    controller: FallbackController<G>,
    models: ModelsConfig,
}

impl<G> DiaryVisualizer<G>
where
    G: ChatCompletion + TextToImage + Clone,
{
    /// Creates a visualizer from configuration.
    pub fn new(gateway: G, config: &MoodcanvasConfig) -> Self {
        Self {
            analyzer: DiaryAnalyzer::with_settings(gateway.clone(), config.analyzer_settings()),
            controller: FallbackController::with_policy(gateway, config.retry.policy()),
            models: config.models.clone(),
        }
    }

    /// Overrides the chat model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.models.text_model = model.into();
        self
    }

    /// Overrides the preferred image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.models.image_model = model.into();
        self
    }

    /// Models in use.
    pub fn models(&self) -> &ModelsConfig {
        &self.models
    }

    /// Image models in trial order.
    pub fn candidates(&self) -> ImageCandidateList {
        candidate_models(&self.models, None)
    }

    /// Analyzes a diary entry.
    pub async fn analyze(&self, diary_text: &str) -> AnalysisResult {
        let request = AnalysisRequest::new(diary_text, self.models.text_model.as_str());
        self.analyzer.analyze(&request).await
    }

    /// Analyzes a diary entry and generates its mood image.
    ///
    /// Image generation is skipped when the analysis failed or produced no
    /// image prompt.
    pub async fn visualize(
        &self,
        diary_text: &str,
        status: Option<&dyn StatusSink>,
    ) -> Visualization {
        let cancel = CancellationToken::new();
        self.visualize_with_cancel(diary_text, status, &cancel).await
    }

    /// Like [`visualize`](Self::visualize), stopping image generation once
    /// `cancel` fires.
    #[instrument(skip_all, fields(text_model = %self.models.text_model, image_model = %self.models.image_model))]
    pub async fn visualize_with_cancel(
        &self,
        diary_text: &str,
        status: Option<&dyn StatusSink>,
        cancel: &CancellationToken,
    ) -> Visualization {
        let analysis = self.analyze(diary_text).await;

        let prompt = analysis
            .analysis()
            .and_then(|a| a.image_prompt_text())
            .map(str::to_string);

        let image = match prompt {
            Some(prompt) => {
                let candidates = self.candidates();
                info!(candidates = candidates.len(), "Generating mood image");
                Some(
                    self.controller
                        .generate_with_cancel(&prompt, &candidates, status, cancel)
                        .await,
                )
            }
            None => {
                debug!("No image prompt, skipping image generation");
                None
            }
        };

        Visualization { analysis, image }
    }
}
