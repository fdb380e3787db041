//! Moodcanvas - diary entries to mood images.
//!
//! Moodcanvas reads a free-text diary entry, asks a chat model for an
//! emotional reading (emotion, feedback, image prompt), then generates an
//! image for the mood, falling back across a ranked list of image models
//! when one is cold, overloaded or failing.
//!
//! # Quick Start
//!
//! ```no_run
//! use moodcanvas::{DiaryVisualizer, MoodcanvasConfig, build_gateway};
//! use moodcanvas_core::{Credential, StatusEvent};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MoodcanvasConfig::load(None)?;
//! let credential = Credential::new(std::env::var("HUGGINGFACE_TOKEN")?)?;
//! let gateway = build_gateway(&config, Some(credential))?;
//!
//! let visualizer = DiaryVisualizer::new(gateway, &config);
//! let print = |event: &StatusEvent| println!("{}", event);
//! let result = visualizer.visualize("Finally finished the project.", Some(&print)).await;
//!
//! if let Some(analysis) = result.analysis().analysis() {
//!     println!("{}: {}", analysis.emotion_or_default(), analysis.feedback_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `moodcanvas_core` - shared data types
//! - `moodcanvas_interface` - gateway capability traits and the status sink
//! - `moodcanvas_error` - error types
//! - `moodcanvas_models` - Hugging Face gateway
//! - `moodcanvas_analysis` - diary analysis and reply interpretation
//! - `moodcanvas_fallback` - multi-model image generation with retries
//!
//! This crate ties them together behind [`DiaryVisualizer`] and loads
//! [`MoodcanvasConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod visualizer;

pub use config::{
    AnalysisConfig, GatewayConfig, ModelsConfig, MoodcanvasConfig, RetryConfig, build_gateway,
};
pub use visualizer::{DiaryVisualizer, Visualization, candidate_models};

pub use moodcanvas_analysis::{AnalyzerSettings, DiaryAnalyzer, ResponseInterpreter, interpret};
pub use moodcanvas_core::{
    AnalysisRequest, AnalysisResult, Credential, EmotionalAnalysis, FallbackResult,
    ImageArtifact, ImageCandidateList, StatusEvent, StatusState,
};
pub use moodcanvas_error::{MoodcanvasError, MoodcanvasResult};
pub use moodcanvas_fallback::{CancellationToken, FallbackController, RetryPolicy};
pub use moodcanvas_interface::{AccountInfo, ChatCompletion, InferenceGateway, StatusSink, TextToImage};
pub use moodcanvas_models::{HuggingFaceEndpoints, HuggingFaceGateway};
