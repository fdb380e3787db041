//! Hugging Face wire format.

use derive_getters::Getters;
use moodcanvas_core::{ChatMessage, ChatRequest};
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ChatCompletionBody {
    /// Model identifier
    model: String,
    /// Conversation
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Always false; replies are read whole
    stream: bool,
}

impl From<&ChatRequest> for ChatCompletionBody {
    fn from(request: &ChatRequest) -> Self {
        Self {
            model: request.model().clone(),
            messages: request.messages().clone(),
            max_tokens: *request.max_tokens(),
            temperature: *request.temperature(),
            stream: false,
        }
    }
}

/// Chat-completion reply; only the fields we read.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ChatCompletionReply {
    /// Candidate completions
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ChatChoice {
    /// Assistant message
    message: ChatChoiceMessage,
}

/// Assistant message inside a choice.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ChatChoiceMessage {
    /// Reply text (absent for tool-call-only replies)
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    /// Text of the first choice, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Text-to-image request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TextToImageBody {
    /// The prompt
    inputs: String,
}

impl TextToImageBody {
    /// Creates a body for `prompt`.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            inputs: prompt.into(),
        }
    }
}

/// Account lookup reply.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct WhoamiReply {
    /// Account name
    name: String,
}

/// Error body returned by the inference API (`{"error": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) error: serde_json::Value,
}

impl ApiErrorBody {
    /// Best-effort message from an error body, falling back to the raw text.
    pub(crate) fn message_from(raw: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(raw) {
            Ok(body) => match body.error {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
            Err(_) => raw.trim().to_string(),
        }
    }
}
