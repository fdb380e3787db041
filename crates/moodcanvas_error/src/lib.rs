//! Error types for the Moodcanvas workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use moodcanvas_error::{MoodcanvasResult, HttpError};
//!
//! fn fetch_data() -> MoodcanvasResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gateway;
mod http;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{MoodcanvasError, MoodcanvasErrorKind, MoodcanvasResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use http::HttpError;
pub use storage::{StorageError, StorageErrorKind};
