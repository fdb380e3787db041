//! Tests for analysis records and results.

use moodcanvas_core::{
    AnalysisResult, DEFAULT_EMOTION, DEFAULT_FEEDBACK, EmotionalAnalysis, ReplyFormat,
};

#[test]
fn test_defaults_apply_only_when_absent() {
    let empty = EmotionalAnalysis::new(None, None, None, ReplyFormat::Structured);
    assert_eq!(empty.emotion_or_default(), DEFAULT_EMOTION);
    assert_eq!(empty.feedback_or_default(), DEFAULT_FEEDBACK);

    let filled = EmotionalAnalysis::new(
        Some(String::new()),
        Some("Rest.".to_string()),
        Some("lake".to_string()),
        ReplyFormat::Structured,
    );
    assert_eq!(filled.emotion_or_default(), "");
    assert_eq!(filled.feedback_or_default(), "Rest.");
    assert_eq!(filled.image_prompt_text(), Some("lake"));
}

#[test]
fn test_blank_image_prompt_is_none() {
    let analysis = EmotionalAnalysis::new(None, None, Some(" \t".to_string()), ReplyFormat::Malformed);

    assert_eq!(analysis.image_prompt_text(), None);
    assert!(!analysis.is_structured());
}

#[test]
fn test_result_serializes_with_status_tag() -> Result<(), Box<dyn std::error::Error>> {
    let failure = AnalysisResult::failure("Model not found");
    let json = serde_json::to_value(&failure)?;
    assert_eq!(json["status"], "failure");
    assert_eq!(json["error_message"], "Model not found");

    let success = AnalysisResult::Success(EmotionalAnalysis::new(
        Some("joy".to_string()),
        None,
        None,
        ReplyFormat::Unstructured,
    ));
    let json = serde_json::to_value(&success)?;
    assert_eq!(json["status"], "success");
    assert_eq!(json["emotion"], "joy");
    assert_eq!(json["format"], "unstructured");
    Ok(())
}

#[test]
fn test_result_accessors() {
    let failure = AnalysisResult::failure("boom");
    assert_eq!(failure.error_message(), Some("boom"));
    assert!(failure.analysis().is_none());
}
