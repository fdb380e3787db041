//! Image generation across a ranked list of models.
//!
//! The [`FallbackController`] tries each candidate model in order, retrying
//! a failing model with a linearly growing, jittered wait before moving on.
//! It never raises: the caller gets a [`FallbackResult`](moodcanvas_core::FallbackResult)
//! and watches progress through a [`StatusSink`](moodcanvas_interface::StatusSink).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod policy;

pub use controller::FallbackController;
pub use policy::RetryPolicy;

pub use tokio_util::sync::CancellationToken;
