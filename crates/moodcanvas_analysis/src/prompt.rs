//! System prompt for diary analysis.

/// Language used for the emotion label and feedback unless configured.
pub const DEFAULT_FEEDBACK_LANGUAGE: &str = "Traditional Chinese";

/// Builds the counselor system prompt.
///
/// The emotion label and feedback are requested in `language`; the image
/// prompt is always requested in English, which image models handle best.
///
/// ```
/// use moodcanvas_analysis::system_prompt;
///
/// let prompt = system_prompt("English");
/// assert!(prompt.contains("\"image_prompt\""));
/// assert!(prompt.contains("(in English)"));
/// ```
pub fn system_prompt(language: &str) -> String {
    format!(
        "You are a warm, empathetic AI counselor. Read the user's diary and provide a response in the following JSON format ONLY:\n\
         {{\n\
         \x20 \"emotion\": \"Identify the main emotion (in {language})\",\n\
         \x20 \"feedback\": \"A warm, healing response (in {language}, around 50 words)\",\n\
         \x20 \"image_prompt\": \"A detailed artistic description of a scene representing the mood for image generation (in English)\"\n\
         }}\n\
         Do not output anything else. Just the JSON."
    )
}
