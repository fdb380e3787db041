//! Inference gateway errors.

/// Failure conditions reported by a remote (or local) inference gateway.
///
/// The `Display` output of [`GatewayErrorKind::Http`] always contains the
/// numeric status code, which the analysis layer relies on when mapping
/// failures to user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// No usable credential was configured
    #[display("no valid access token configured")]
    MissingCredential,
    /// The service answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The request never produced a response (DNS, TLS, timeout, reset)
    #[display("request failed: {}", _0)]
    Transport(String),
    /// The response arrived but could not be decoded
    #[display("could not decode response: {}", _0)]
    Decode(String),
    /// The image endpoint answered with an empty payload
    #[display("image response was empty")]
    EmptyImage,
    /// The model does not offer the requested task
    #[display("unsupported task: {}", _0)]
    Unsupported(String),
}

impl GatewayErrorKind {
    /// Whether waiting and trying again could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayErrorKind::Http { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GatewayErrorKind::Transport(_) => true,
            GatewayErrorKind::EmptyImage => true,
            _ => false,
        }
    }

    /// Short label used when recording error metrics.
    pub fn metric_label(&self) -> &'static str {
        match self {
            GatewayErrorKind::MissingCredential => "credential",
            GatewayErrorKind::Http { status, .. } => match *status {
                401 | 403 => "auth",
                404 => "not_found",
                429 => "rate_limit",
                503 => "unavailable",
                400..=499 => "invalid_request",
                _ => "server",
            },
            GatewayErrorKind::Transport(_) => "transport",
            GatewayErrorKind::Decode(_) | GatewayErrorKind::EmptyImage => "decode",
            GatewayErrorKind::Unsupported(_) => "unsupported",
        }
    }
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use moodcanvas_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Http {
///     status: 503,
///     message: "Model is currently loading".to_string(),
/// });
/// assert!(err.kind.is_transient());
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<GatewayErrorKind> for GatewayError {
    #[track_caller]
    fn from(kind: GatewayErrorKind) -> Self {
        Self::new(kind)
    }
}
