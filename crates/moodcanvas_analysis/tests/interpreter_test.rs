//! Tests for reply interpretation.

use moodcanvas_analysis::{
    MALFORMED_EMOTION, MALFORMED_IMAGE_PROMPT, ResponseInterpreter, UNSTRUCTURED_EMOTION,
    UNSTRUCTURED_IMAGE_PROMPT, interpret, system_prompt,
};
use moodcanvas_core::ReplyFormat;

#[test]
fn test_structured_reply_with_surrounding_prose() {
    let raw = "Here you go!\n{\"emotion\": \"relief\", \"feedback\": \"You made it through.\", \"image_prompt\": \"sunrise over a quiet lake\"}\nTake care.";
    let analysis = interpret(raw);

    assert_eq!(*analysis.format(), ReplyFormat::Structured);
    assert_eq!(analysis.emotion().as_deref(), Some("relief"));
    assert_eq!(analysis.feedback().as_deref(), Some("You made it through."));
    assert_eq!(
        analysis.image_prompt().as_deref(),
        Some("sunrise over a quiet lake")
    );
}

#[test]
fn test_structured_reply_in_markdown_fence() {
    let raw = "```json\n{\"emotion\": \"joy\", \"feedback\": \"Lovely day.\", \"image_prompt\": \"meadow\"}\n```";
    let analysis = interpret(raw);

    assert!(analysis.is_structured());
    assert_eq!(analysis.emotion().as_deref(), Some("joy"));
}

#[test]
fn test_structured_reply_missing_fields_stays_absent() {
    let analysis = interpret("{\"feedback\": \"Rest now.\"}");

    assert_eq!(*analysis.format(), ReplyFormat::Structured);
    assert_eq!(analysis.emotion(), &None);
    assert_eq!(analysis.image_prompt(), &None);
    assert_eq!(analysis.emotion_or_default(), "calm");
    assert_eq!(analysis.feedback_or_default(), "Rest now.");
    assert_eq!(analysis.image_prompt_text(), None);
}

#[test]
fn test_extra_fields_are_ignored() {
    let analysis = interpret("{\"emotion\": \"hope\", \"confidence\": 0.9}");

    assert!(analysis.is_structured());
    assert_eq!(analysis.emotion().as_deref(), Some("hope"));
}

#[test]
fn test_unstructured_reply() {
    let raw = "  You seem tired today. Please rest.  ";
    let analysis = interpret(raw);

    assert_eq!(*analysis.format(), ReplyFormat::Unstructured);
    assert_eq!(analysis.emotion().as_deref(), Some(UNSTRUCTURED_EMOTION));
    assert_eq!(
        analysis.feedback().as_deref(),
        Some("You seem tired today. Please rest.")
    );
    assert_eq!(
        analysis.image_prompt().as_deref(),
        Some(UNSTRUCTURED_IMAGE_PROMPT)
    );
}

#[test]
fn test_empty_reply_is_unstructured() {
    let analysis = interpret("");

    assert_eq!(*analysis.format(), ReplyFormat::Unstructured);
    assert_eq!(analysis.emotion().as_deref(), Some(UNSTRUCTURED_EMOTION));
    assert_eq!(analysis.feedback().as_deref(), Some(""));
}

#[test]
fn test_malformed_json_reply() {
    let raw = "{\"emotion\": \"sad\", \"feedback\": }";
    let analysis = interpret(raw);

    assert_eq!(*analysis.format(), ReplyFormat::Malformed);
    assert_eq!(analysis.emotion().as_deref(), Some(MALFORMED_EMOTION));
    assert_eq!(analysis.feedback().as_deref(), Some(raw));
    assert_eq!(
        analysis.image_prompt().as_deref(),
        Some(MALFORMED_IMAGE_PROMPT)
    );
}

#[test]
fn test_opening_brace_without_closing_is_malformed() {
    let analysis = interpret("I feel {unsettled today");

    assert_eq!(*analysis.format(), ReplyFormat::Malformed);
    assert_eq!(
        analysis.feedback().as_deref(),
        Some("I feel {unsettled today")
    );
}

#[test]
fn test_closing_brace_before_opening_is_malformed() {
    let analysis = interpret("} then {");

    assert_eq!(*analysis.format(), ReplyFormat::Malformed);
}

#[test]
fn test_non_string_field_is_malformed() {
    let analysis = interpret("{\"emotion\": 3, \"feedback\": \"ok\"}");

    assert_eq!(*analysis.format(), ReplyFormat::Malformed);
    assert_eq!(analysis.emotion().as_deref(), Some(MALFORMED_EMOTION));
}

#[test]
fn test_echoed_prompt_is_stripped_from_malformed_reply() {
    let interpreter = ResponseInterpreter::new("Answer in JSON.");
    let analysis = interpreter.interpret("Answer in JSON. {emotion: weary}");

    assert_eq!(*analysis.format(), ReplyFormat::Malformed);
    assert_eq!(analysis.feedback().as_deref(), Some("{emotion: weary}"));
}

#[test]
fn test_echoed_template_parses_as_record() {
    let prompt = system_prompt("English");
    let raw = format!("{}\nI hear you, and today sounds heavy.", prompt);
    let analysis = ResponseInterpreter::new(prompt.clone()).interpret(&raw);

    // The echoed prompt carries its own JSON template, which parses.
    assert!(analysis.is_structured());
    assert_eq!(
        analysis.emotion().as_deref(),
        Some("Identify the main emotion (in English)")
    );
}

#[test]
fn test_unstructured_strips_custom_prompt() {
    let interpreter = ResponseInterpreter::new("BE KIND.");
    let analysis = interpreter.interpret("BE KIND. It will pass.");

    assert_eq!(*analysis.format(), ReplyFormat::Unstructured);
    assert_eq!(analysis.feedback().as_deref(), Some("It will pass."));
}

#[test]
fn test_interpretation_is_deterministic() {
    let raw = "noise {\"emotion\": \"calm\"} noise";
    assert_eq!(interpret(raw), interpret(raw));
}
