//! Image payloads and the outcome of a fallback run.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque image bytes returned by an image-generation model.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ImageArtifact {
    /// Encoded image data (PNG, JPEG, ...)
    bytes: Vec<u8>,
    /// MIME type reported by the producer, if any
    mime: Option<String>,
}

impl ImageArtifact {
    /// Wraps encoded image bytes.
    pub fn new(bytes: Vec<u8>, mime: Option<String>) -> Self {
        Self { bytes, mime }
    }

    /// True when the payload holds no data.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// File extension matching the MIME type, defaulting to `png`.
    ///
    /// ```
    /// use moodcanvas_core::ImageArtifact;
    ///
    /// let jpeg = ImageArtifact::new(vec![0xFF, 0xD8], Some("image/jpeg".into()));
    /// assert_eq!(jpeg.extension(), "jpg");
    /// assert_eq!(ImageArtifact::new(vec![1], None).extension(), "png");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self.mime.as_deref() {
            Some("image/jpeg") | Some("image/jpg") => "jpg",
            Some("image/webp") => "webp",
            Some("image/gif") => "gif",
            _ => "png",
        }
    }

    /// Consumes the artifact, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl std::fmt::Debug for ImageArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageArtifact")
            .field("len", &self.bytes.len())
            .field("mime", &self.mime)
            .finish()
    }
}

/// Result of one (model, attempt) pair inside the fallback loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The model produced an image
    Image(ImageArtifact),
    /// The attempt failed for the given reason
    Failed(String),
}

/// Outcome of a complete fallback run.
///
/// The image and the identifier of the model that produced it are present
/// together or absent together; the constructors are the only way to build
/// a value.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::{FallbackResult, ImageArtifact};
///
/// let ok = FallbackResult::success(ImageArtifact::new(vec![1, 2], None), "model-a");
/// assert_eq!(ok.success_model(), Some("model-a"));
///
/// let failed = FallbackResult::exhausted();
/// assert!(failed.image().is_none() && failed.success_model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FallbackResult {
    outcome: Option<(ImageArtifact, String)>,
}

impl FallbackResult {
    /// A successful run.
    pub fn success(image: ImageArtifact, model: impl Into<String>) -> Self {
        Self {
            outcome: Some((image, model.into())),
        }
    }

    /// Every candidate failed, or the run was never started.
    pub fn exhausted() -> Self {
        Self { outcome: None }
    }

    /// True when an image was produced.
    pub fn is_success(&self) -> bool {
        self.outcome.is_some()
    }

    /// The generated image.
    pub fn image(&self) -> Option<&ImageArtifact> {
        self.outcome.as_ref().map(|(image, _)| image)
    }

    /// The model that produced the image.
    pub fn success_model(&self) -> Option<&str> {
        self.outcome.as_ref().map(|(_, model)| model.as_str())
    }

    /// Consumes the result, yielding `(image, model)` on success.
    pub fn into_parts(self) -> Option<(ImageArtifact, String)> {
        self.outcome
    }
}
