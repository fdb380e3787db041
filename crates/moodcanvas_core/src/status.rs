//! Progress notifications emitted while generating an image.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Coarse state carried by a [`StatusEvent`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusState {
    /// Work is in progress
    Running,
    /// An image was produced
    Complete,
    /// Something failed (a model was exhausted, or everything was)
    Error,
}

/// A single observational progress notification.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::{StatusEvent, StatusState};
///
/// let event = StatusEvent::running("Trying model runwayml/stable-diffusion-v1-5");
/// assert_eq!(*event.state(), StatusState::Running);
/// assert_eq!(event.to_string(), "[running] Trying model runwayml/stable-diffusion-v1-5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_more::Display)]
#[display("[{}] {}", state, message)]
pub struct StatusEvent {
    /// Human-readable description
    message: String,
    /// Progress state
    state: StatusState,
}

impl StatusEvent {
    /// Creates an event.
    pub fn new(message: impl Into<String>, state: StatusState) -> Self {
        Self {
            message: message.into(),
            state,
        }
    }

    /// Creates a [`StatusState::Running`] event.
    pub fn running(message: impl Into<String>) -> Self {
        Self::new(message, StatusState::Running)
    }

    /// Creates a [`StatusState::Complete`] event.
    pub fn complete(message: impl Into<String>) -> Self {
        Self::new(message, StatusState::Complete)
    }

    /// Creates a [`StatusState::Error`] event.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusState::Error)
    }
}
