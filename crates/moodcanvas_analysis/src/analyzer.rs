//! Diary analysis over a chat-completion gateway.

use crate::classify::{CREDENTIAL_MESSAGE, describe_failure};
use crate::interpreter::ResponseInterpreter;
use crate::prompt::{DEFAULT_FEEDBACK_LANGUAGE, system_prompt};
use moodcanvas_core::{AnalysisRequest, AnalysisResult, ChatMessage, ChatRequest};
use moodcanvas_error::{BuilderError, MoodcanvasResult};
use moodcanvas_interface::ChatCompletion;
use tracing::{debug, info, instrument, warn};

/// Message returned for a blank diary entry.
const EMPTY_DIARY_MESSAGE: &str = "diary entry is empty";

/// Sampling settings for analysis requests.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Language the feedback is written in
    pub feedback_language: String,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
            feedback_language: DEFAULT_FEEDBACK_LANGUAGE.to_string(),
        }
    }
}

/// Sends diary entries to a chat model and interprets the replies.
///
/// Every failure is folded into [`AnalysisResult::Failure`]; callers never
/// see a raw gateway error.
#[derive(Debug, Clone)]
pub struct DiaryAnalyzer<G> {
    gateway: G,
    interpreter: ResponseInterpreter,
    settings: AnalyzerSettings,
}

impl<G: ChatCompletion> DiaryAnalyzer<G> {
    /// Creates an analyzer with default settings.
    pub fn new(gateway: G) -> Self {
        Self::with_settings(gateway, AnalyzerSettings::default())
    }

    /// Creates an analyzer with explicit settings.
    pub fn with_settings(gateway: G, settings: AnalyzerSettings) -> Self {
        let interpreter = ResponseInterpreter::new(system_prompt(&settings.feedback_language));
        Self {
            gateway,
            interpreter,
            settings,
        }
    }

    /// Replaces the reply interpreter.
    pub fn with_interpreter(mut self, interpreter: ResponseInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Active settings.
    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Analyzes one diary entry.
    ///
    /// A blank entry or an unready gateway fails without issuing a call.
    #[instrument(skip(self, request), fields(model = %request.model(), provider = self.gateway.provider_name()))]
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        if request.diary_text().trim().is_empty() {
            debug!("Diary entry is blank, skipping analysis");
            return AnalysisResult::failure(EMPTY_DIARY_MESSAGE);
        }

        if !self.gateway.is_ready() {
            warn!("Gateway is not ready, skipping analysis");
            return AnalysisResult::failure(CREDENTIAL_MESSAGE);
        }

        let reply = match self.build_request(request) {
            Ok(chat) => self.gateway.chat_completion(&chat).await,
            Err(e) => Err(e),
        };

        match reply {
            Ok(raw) => {
                let analysis = self.interpreter.interpret(&raw);
                info!(
                    format = %analysis.format(),
                    emotion = analysis.emotion_or_default(),
                    "Diary analyzed"
                );
                AnalysisResult::Success(analysis)
            }
            Err(e) => {
                warn!(error = %e, "Analysis call failed");
                AnalysisResult::failure(describe_failure(&e, request.model()))
            }
        }
    }

    fn build_request(&self, request: &AnalysisRequest) -> MoodcanvasResult<ChatRequest> {
        let chat = ChatRequest::builder()
            .model(request.model().clone())
            .messages(vec![
                ChatMessage::system(self.interpreter.system_prompt()),
                ChatMessage::user(request.diary_text().clone()),
            ])
            .max_tokens(Some(self.settings.max_tokens))
            .temperature(Some(self.settings.temperature))
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;
        Ok(chat)
    }
}
