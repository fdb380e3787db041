//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GatewayError, HttpError, StorageError};

/// Every error condition the workspace can report.
///
/// # Examples
///
/// ```
/// use moodcanvas_error::{MoodcanvasError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MoodcanvasError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MoodcanvasErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration or credential error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Inference gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// File read/write error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Moodcanvas error with kind discrimination.
///
/// # Examples
///
/// ```
/// use moodcanvas_error::{MoodcanvasResult, ConfigError};
///
/// fn might_fail() -> MoodcanvasResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Moodcanvas Error: {}", _0)]
pub struct MoodcanvasError(Box<MoodcanvasErrorKind>);

impl MoodcanvasError {
    /// Create a new error from a kind.
    pub fn new(kind: MoodcanvasErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MoodcanvasErrorKind {
        &self.0
    }

    /// The error message without the source location suffix.
    ///
    /// Location line numbers would otherwise leak into substring checks on
    /// the message (a line 404 is not a "404 Not Found").
    ///
    /// ```
    /// use moodcanvas_error::{GatewayError, GatewayErrorKind, MoodcanvasError};
    ///
    /// let err: MoodcanvasError = GatewayError::new(GatewayErrorKind::Http {
    ///     status: 401,
    ///     message: "Invalid credentials".to_string(),
    /// })
    /// .into();
    /// assert_eq!(err.detail(), "HTTP 401 error: Invalid credentials");
    /// ```
    pub fn detail(&self) -> String {
        match self.kind() {
            MoodcanvasErrorKind::Http(e) => e.message.clone(),
            MoodcanvasErrorKind::Config(e) => e.message.clone(),
            MoodcanvasErrorKind::Builder(e) => e.kind().to_string(),
            MoodcanvasErrorKind::Gateway(e) => e.kind.to_string(),
            MoodcanvasErrorKind::Storage(e) => e.kind.to_string(),
        }
    }

    /// The gateway error kind, if this error came from a gateway.
    pub fn gateway_kind(&self) -> Option<&crate::GatewayErrorKind> {
        match self.kind() {
            MoodcanvasErrorKind::Gateway(e) => Some(&e.kind),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to MoodcanvasErrorKind
impl<T> From<T> for MoodcanvasError
where
    T: Into<MoodcanvasErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Moodcanvas operations.
pub type MoodcanvasResult<T> = std::result::Result<T, MoodcanvasError>;
