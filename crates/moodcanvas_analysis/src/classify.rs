//! Mapping gateway failures to user-facing messages.

use moodcanvas_error::{GatewayErrorKind, MoodcanvasError};

/// Message returned when no usable access token is configured.
pub const CREDENTIAL_MESSAGE: &str =
    "Please provide a valid Hugging Face access token (ASCII letters and digits only).";

/// Category of a failed text-analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FailureCategory {
    /// Token rejected or lacking permission
    Unauthorized,
    /// The model id does not exist
    ModelNotFound,
    /// The model is cold-starting or overloaded
    ModelLoading,
    /// The model does not serve this task
    ModelNotSupported,
    /// Anything else; the raw message is echoed
    Other,
}

impl FailureCategory {
    /// Classifies an error message. Checks run in order; first match wins.
    ///
    /// ```
    /// use moodcanvas_analysis::FailureCategory;
    ///
    /// assert_eq!(FailureCategory::classify("HTTP 401 error: bad token"), FailureCategory::Unauthorized);
    /// assert_eq!(FailureCategory::classify("HTTP 503 error: loading"), FailureCategory::ModelLoading);
    /// assert_eq!(FailureCategory::classify("connection reset"), FailureCategory::Other);
    /// ```
    pub fn classify(message: &str) -> Self {
        if message.contains("401") {
            FailureCategory::Unauthorized
        } else if message.contains("404") {
            FailureCategory::ModelNotFound
        } else if message.contains("503") {
            FailureCategory::ModelLoading
        } else if message.contains("not supported") {
            FailureCategory::ModelNotSupported
        } else {
            FailureCategory::Other
        }
    }

    /// Classifies a gateway failure by its kind.
    ///
    /// HTTP failures are judged by status code; the message is only consulted
    /// for "not supported". Transport and decode text may carry a request URL,
    /// so it is never searched for status codes.
    ///
    /// ```
    /// use moodcanvas_analysis::FailureCategory;
    /// use moodcanvas_error::GatewayErrorKind;
    ///
    /// let refused = GatewayErrorKind::Transport("error sending request for url (http://10.0.0.1:4010/)".into());
    /// assert_eq!(FailureCategory::from_gateway(&refused), FailureCategory::Other);
    /// ```
    pub fn from_gateway(kind: &GatewayErrorKind) -> Self {
        match kind {
            GatewayErrorKind::Http { status, message } => match *status {
                401 => FailureCategory::Unauthorized,
                404 => FailureCategory::ModelNotFound,
                503 => FailureCategory::ModelLoading,
                _ if message.contains("not supported") => FailureCategory::ModelNotSupported,
                _ => FailureCategory::Other,
            },
            GatewayErrorKind::Unsupported(_) => FailureCategory::ModelNotSupported,
            GatewayErrorKind::MissingCredential
            | GatewayErrorKind::Transport(_)
            | GatewayErrorKind::Decode(_)
            | GatewayErrorKind::EmptyImage => FailureCategory::Other,
        }
    }

    /// User-facing message for this category.
    pub fn user_message(&self, model: &str, raw_message: &str) -> String {
        match self {
            FailureCategory::Unauthorized => {
                "The access token is invalid or lacks the required permissions.".to_string()
            }
            FailureCategory::ModelNotFound => {
                format!("Model not found ({}). Please try a different model ID.", model)
            }
            FailureCategory::ModelLoading => {
                "The model is starting up (cold boot). Please try again in a moment.".to_string()
            }
            FailureCategory::ModelNotSupported => {
                format!("Model not supported ({}). Please try a different model ID.", model)
            }
            FailureCategory::Other => format!("API error: {}", raw_message),
        }
    }
}

/// User-facing message for a failed analysis call against `model`.
pub fn describe_failure(error: &MoodcanvasError, model: &str) -> String {
    let detail = error.detail();
    let category = match error.gateway_kind() {
        Some(GatewayErrorKind::MissingCredential) => return CREDENTIAL_MESSAGE.to_string(),
        Some(kind) => FailureCategory::from_gateway(kind),
        None => FailureCategory::classify(&detail),
    };
    category.user_message(model, &detail)
}
