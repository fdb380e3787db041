//! Inference gateway implementations for Moodcanvas.
//!
//! # Available Gateways
//!
//! - **HuggingFace** - chat completion, text-to-image and token lookup over
//!   the Hugging Face inference API
//!
//! # Example
//!
//! ```no_run
//! use moodcanvas_core::Credential;
//! use moodcanvas_interface::TextToImage;
//! use moodcanvas_models::{HuggingFaceEndpoints, HuggingFaceGateway};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let token = Credential::new(std::env::var("HUGGINGFACE_TOKEN")?)?;
//! let gateway = HuggingFaceGateway::new(Some(token), HuggingFaceEndpoints::default())?;
//! let image = gateway
//!     .text_to_image("soft watercolor sunrise", "runwayml/stable-diffusion-v1-5")
//!     .await?;
//! println!("{} bytes", image.len());
//! # Ok(())
//! # }
//! ```

mod huggingface;
mod metrics;

pub use huggingface::{
    ChatChoice, ChatChoiceMessage, ChatCompletionBody, ChatCompletionReply, HuggingFaceEndpoints,
    HuggingFaceEndpointsBuilder, HuggingFaceGateway, TextToImageBody, WhoamiReply,
};
pub use metrics::GatewayMetrics;
