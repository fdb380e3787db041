//! Trait definitions for the Moodcanvas diary visualizer.
//!
//! The inference gateway is split into a base trait plus capability traits,
//! so the analyzer only needs chat and the fallback controller only needs
//! image generation.

mod status;
mod traits;

pub use status::StatusSink;
pub use traits::{AccountInfo, ChatCompletion, InferenceGateway, TextToImage};
