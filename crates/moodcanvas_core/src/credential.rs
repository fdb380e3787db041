//! Access token for the inference gateway.

use moodcanvas_error::{ConfigError, MoodcanvasResult};

/// A validated, ASCII-only access token.
///
/// Surrounding whitespace is trimmed so tokens pasted with a trailing newline
/// still work. The `Debug` output never contains the secret.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::Credential;
///
/// let token = Credential::new("  hf_abc123\n").unwrap();
/// assert_eq!(token.expose(), "hf_abc123");
/// assert!(!format!("{:?}", token).contains("abc123"));
///
/// assert!(Credential::new("").is_err());
/// assert!(Credential::new("hf_tökén").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Validates and wraps a raw token string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is blank or contains
    /// non-ASCII characters (HTTP headers cannot carry them).
    #[track_caller]
    pub fn new(raw: impl AsRef<str>) -> MoodcanvasResult<Self> {
        let token = raw.as_ref().trim();
        if token.is_empty() {
            return Err(ConfigError::new("access token is empty").into());
        }
        if !token.is_ascii() {
            return Err(
                ConfigError::new("access token must contain only ASCII characters").into(),
            );
        }
        Ok(Self(token.to_string()))
    }

    /// Validates an optional token, treating invalid values as absent.
    pub fn from_optional(raw: Option<impl AsRef<str>>) -> Option<Self> {
        raw.and_then(|r| Self::new(r).ok())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_token_is_rejected() {
        assert!(Credential::new(" \t\n").is_err());
    }

    #[test]
    fn test_from_optional_drops_invalid_tokens() {
        assert!(Credential::from_optional(None::<&str>).is_none());
        assert!(Credential::from_optional(Some("日記")).is_none());
        assert_eq!(
            Credential::from_optional(Some("hf_ok")).map(|c| c.expose().to_string()),
            Some("hf_ok".to_string())
        );
    }
}
