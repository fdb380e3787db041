//! Hugging Face inference API gateway.

mod dto;
mod endpoints;
mod gateway;

pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatCompletionBody, ChatCompletionReply, TextToImageBody,
    WhoamiReply,
};
pub use endpoints::{HuggingFaceEndpoints, HuggingFaceEndpointsBuilder};
pub use gateway::HuggingFaceGateway;
