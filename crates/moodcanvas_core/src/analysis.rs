//! Diary analysis requests and results.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Emotion shown when a structured reply omitted the field.
pub const DEFAULT_EMOTION: &str = "calm";

/// Feedback shown when a structured reply omitted the field.
pub const DEFAULT_FEEDBACK: &str = "...";

/// One diary submission to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnalysisRequest {
    /// Free-text diary entry
    diary_text: String,
    /// Chat model identifier
    model: String,
}

impl AnalysisRequest {
    /// Creates a request.
    pub fn new(diary_text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            diary_text: diary_text.into(),
            model: model.into(),
        }
    }
}

/// How the model's reply was turned into an [`EmotionalAnalysis`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReplyFormat {
    /// The reply contained a well-formed JSON record
    Structured,
    /// The reply ignored the requested format entirely (no `{`)
    Unstructured,
    /// The reply attempted a JSON record but it did not parse
    Malformed,
}

/// Structured emotional reading of a diary entry.
///
/// Fields hold exactly what the model returned; display defaults are applied
/// by the `*_or_default` accessors.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::{EmotionalAnalysis, ReplyFormat};
///
/// let analysis = EmotionalAnalysis::new(None, Some("Take a breath.".into()), None, ReplyFormat::Structured);
/// assert_eq!(analysis.emotion_or_default(), "calm");
/// assert_eq!(analysis.feedback_or_default(), "Take a breath.");
/// assert_eq!(analysis.image_prompt_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct EmotionalAnalysis {
    /// Main emotion label
    emotion: Option<String>,
    /// Warm, healing response
    feedback: Option<String>,
    /// English scene description for image generation
    image_prompt: Option<String>,
    /// Provenance of the record
    format: ReplyFormat,
}

impl EmotionalAnalysis {
    /// Creates an analysis record.
    pub fn new(
        emotion: Option<String>,
        feedback: Option<String>,
        image_prompt: Option<String>,
        format: ReplyFormat,
    ) -> Self {
        Self {
            emotion,
            feedback,
            image_prompt,
            format,
        }
    }

    /// Emotion label, or [`DEFAULT_EMOTION`].
    pub fn emotion_or_default(&self) -> &str {
        self.emotion.as_deref().unwrap_or(DEFAULT_EMOTION)
    }

    /// Feedback text, or [`DEFAULT_FEEDBACK`].
    pub fn feedback_or_default(&self) -> &str {
        self.feedback.as_deref().unwrap_or(DEFAULT_FEEDBACK)
    }

    /// The image prompt, if present and not blank.
    pub fn image_prompt_text(&self) -> Option<&str> {
        self.image_prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// True unless the reply was degraded.
    pub fn is_structured(&self) -> bool {
        self.format == ReplyFormat::Structured
    }
}

/// Outcome of analyzing one diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// The gateway answered; the reply was interpreted (possibly degraded)
    Success(EmotionalAnalysis),
    /// The gateway call failed or could not be attempted
    Failure {
        /// User-facing description of what went wrong
        error_message: String,
    },
}

impl AnalysisResult {
    /// Creates a failure result.
    pub fn failure(error_message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            error_message: error_message.into(),
        }
    }

    /// The analysis, when successful.
    pub fn analysis(&self) -> Option<&EmotionalAnalysis> {
        match self {
            AnalysisResult::Success(analysis) => Some(analysis),
            AnalysisResult::Failure { .. } => None,
        }
    }

    /// The failure message, when unsuccessful.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisResult::Success(_) => None,
            AnalysisResult::Failure { error_message } => Some(error_message),
        }
    }
}
