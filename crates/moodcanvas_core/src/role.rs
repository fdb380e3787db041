//! Role types for chat participants.

use serde::{Deserialize, Serialize};

/// Speaker of a chat message.
///
/// Serialized in lowercase, as chat-completion endpoints expect.
///
/// # Examples
///
/// ```
/// use moodcanvas_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation
    System,
    /// The diary author
    User,
    /// The model
    Assistant,
}
