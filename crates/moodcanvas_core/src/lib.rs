//! Core data types for the Moodcanvas diary visualizer.
//!
//! This crate provides the request, result and event types shared by the
//! analysis, fallback and gateway crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod candidates;
mod credential;
mod image;
mod request;
mod role;
mod status;

pub use analysis::{
    AnalysisRequest, AnalysisResult, DEFAULT_EMOTION, DEFAULT_FEEDBACK, EmotionalAnalysis,
    ReplyFormat,
};
pub use candidates::ImageCandidateList;
pub use credential::Credential;
pub use image::{AttemptOutcome, FallbackResult, ImageArtifact};
pub use request::{ChatMessage, ChatRequest, ChatRequestBuilder};
pub use role::Role;
pub use status::{StatusEvent, StatusState};
