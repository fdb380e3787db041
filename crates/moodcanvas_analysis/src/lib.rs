//! Diary analysis for Moodcanvas.
//!
//! Turns a diary entry into an [`AnalysisResult`](moodcanvas_core::AnalysisResult):
//! the [`DiaryAnalyzer`] asks a chat model for a JSON record, the
//! [`ResponseInterpreter`] turns whatever comes back into a record (degrading
//! instead of failing), and [`FailureCategory`] maps gateway failures to
//! messages a diary author can act on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classify;
mod interpreter;
mod prompt;

pub use analyzer::{AnalyzerSettings, DiaryAnalyzer};
pub use classify::{CREDENTIAL_MESSAGE, FailureCategory, describe_failure};
pub use interpreter::{
    MALFORMED_EMOTION, MALFORMED_IMAGE_PROMPT, ResponseInterpreter, UNSTRUCTURED_EMOTION,
    UNSTRUCTURED_IMAGE_PROMPT, interpret,
};
pub use prompt::{DEFAULT_FEEDBACK_LANGUAGE, system_prompt};
