//! Interpretation of free-form chat replies.
//!
//! Models asked for "JSON only" still wrap the record in prose, fence it in
//! markdown, or ignore the request entirely. Interpretation never fails: a
//! reply that cannot be read as a record degrades to a readable analysis
//! built around the raw text.

use crate::prompt::{DEFAULT_FEEDBACK_LANGUAGE, system_prompt};
use moodcanvas_core::{EmotionalAnalysis, ReplyFormat};
use serde::Deserialize;
use tracing::{debug, warn};

/// Emotion used when the reply contained no `{` at all.
pub const UNSTRUCTURED_EMOTION: &str = "analysis completed";

/// Image prompt used when the reply contained no `{` at all.
pub const UNSTRUCTURED_IMAGE_PROMPT: &str = "calm healing atmosphere, soft lighting";

/// Emotion used when the reply attempted a record that did not parse.
pub const MALFORMED_EMOTION: &str = "complex";

/// Image prompt used when the reply attempted a record that did not parse.
pub const MALFORMED_IMAGE_PROMPT: &str = "abstract healing art, soft colors";

/// Fields read from the model's JSON record. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct ReplyRecord {
    #[serde(default)]
    emotion: Option<String>,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default)]
    image_prompt: Option<String>,
}

/// Turns raw chat replies into [`EmotionalAnalysis`] records.
///
/// Holds the system prompt so it can be removed from degraded feedback when
/// a model echoes its instructions back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInterpreter {
    system_prompt: String,
}

impl Default for ResponseInterpreter {
    fn default() -> Self {
        Self::new(system_prompt(DEFAULT_FEEDBACK_LANGUAGE))
    }
}

impl ResponseInterpreter {
    /// Creates an interpreter that strips `system_prompt` from degraded replies.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// The system prompt this interpreter strips.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Interprets one reply.
    ///
    /// 1. No `{` anywhere: [`ReplyFormat::Unstructured`] with
    ///    [`UNSTRUCTURED_EMOTION`] and [`UNSTRUCTURED_IMAGE_PROMPT`].
    /// 2. The span from the first `{` to the last `}` is missing or is not a
    ///    JSON object with string fields: [`ReplyFormat::Malformed`] with
    ///    [`MALFORMED_EMOTION`] and [`MALFORMED_IMAGE_PROMPT`].
    /// 3. Otherwise the record's fields, unchanged and undefaulted.
    ///
    /// Degraded forms carry the raw reply (minus any echoed system prompt,
    /// trimmed) as feedback.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodcanvas_analysis::ResponseInterpreter;
    /// use moodcanvas_core::ReplyFormat;
    ///
    /// let interpreter = ResponseInterpreter::default();
    ///
    /// let reply = "Sure! {\"emotion\": \"relief\", \"feedback\": \"Well done.\", \"image_prompt\": \"open sky\"}";
    /// let analysis = interpreter.interpret(reply);
    /// assert_eq!(analysis.emotion().as_deref(), Some("relief"));
    /// assert_eq!(*analysis.format(), ReplyFormat::Structured);
    ///
    /// let analysis = interpreter.interpret("You sound tired. Rest well.");
    /// assert_eq!(analysis.emotion().as_deref(), Some("analysis completed"));
    /// assert_eq!(analysis.feedback().as_deref(), Some("You sound tired. Rest well."));
    /// ```
    pub fn interpret(&self, raw: &str) -> EmotionalAnalysis {
        let Some(start) = raw.find('{') else {
            debug!(reply_len = raw.len(), "Reply contained no JSON object");
            return self.degraded(raw, ReplyFormat::Unstructured);
        };

        let record = raw
            .rfind('}')
            .filter(|&end| end > start)
            .ok_or_else(|| "no closing brace after the opening brace".to_string())
            .and_then(|end| {
                serde_json::from_str::<ReplyRecord>(&raw[start..=end]).map_err(|e| e.to_string())
            });

        match record {
            Ok(record) => EmotionalAnalysis::new(
                record.emotion,
                record.feedback,
                record.image_prompt,
                ReplyFormat::Structured,
            ),
            Err(reason) => {
                warn!(reason = %reason, reply_len = raw.len(), "Reply JSON was malformed");
                self.degraded(raw, ReplyFormat::Malformed)
            }
        }
    }

    fn degraded(&self, raw: &str, format: ReplyFormat) -> EmotionalAnalysis {
        let (emotion, image_prompt) = match format {
            ReplyFormat::Unstructured => (UNSTRUCTURED_EMOTION, UNSTRUCTURED_IMAGE_PROMPT),
            _ => (MALFORMED_EMOTION, MALFORMED_IMAGE_PROMPT),
        };

        EmotionalAnalysis::new(
            Some(emotion.to_string()),
            Some(self.strip_prompt(raw)),
            Some(image_prompt.to_string()),
            format,
        )
    }

    fn strip_prompt(&self, raw: &str) -> String {
        if self.system_prompt.is_empty() {
            raw.trim().to_string()
        } else {
            raw.replace(&self.system_prompt, "").trim().to_string()
        }
    }
}

/// Interprets a reply with the default system prompt.
///
/// See [`ResponseInterpreter::interpret`].
pub fn interpret(raw: &str) -> EmotionalAnalysis {
    ResponseInterpreter::default().interpret(raw)
}
