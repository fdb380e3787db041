//! Tests for layered configuration loading.

use moodcanvas::{MoodcanvasConfig, candidate_models};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_bundled_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config = MoodcanvasConfig::bundled()?;

    assert_eq!(config.models.text_model, "Qwen/Qwen2.5-72B-Instruct");
    assert_eq!(config.models.image_model, "runwayml/stable-diffusion-v1-5");
    assert_eq!(
        config.models.fallback_image_models,
        vec![
            "runwayml/stable-diffusion-v1-5",
            "CompVis/stable-diffusion-v1-4",
            "prompthero/openjourney",
            "stabilityai/stable-diffusion-2-1",
        ]
    );
    assert_eq!(config.retry.max_retries_per_model, 2);
    assert_eq!(config.gateway.max_tokens, 500);
    assert_eq!(config.gateway.timeout_secs, 120);
    assert_eq!(config.analysis.feedback_language, "Traditional Chinese");
    Ok(())
}

#[test]
fn test_bundled_retry_policy() -> Result<(), Box<dyn std::error::Error>> {
    let policy = MoodcanvasConfig::bundled()?.retry.policy();

    assert_eq!(policy.total_attempts(), 3);
    assert_eq!(*policy.backoff_step(), Duration::from_secs(2));
    assert_eq!(*policy.max_jitter(), Duration::from_secs(1));
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        "[models]\ntext_model = \"google/gemma-2-9b-it\"\n\n[retry]\nmax_retries_per_model = 4\nbackoff_step_secs = 0.5"
    )?;

    let config = MoodcanvasConfig::from_file(file.path())?;

    assert_eq!(config.models.text_model, "google/gemma-2-9b-it");
    assert_eq!(config.models.image_model, "runwayml/stable-diffusion-v1-5");
    assert_eq!(config.retry.max_retries_per_model, 4);
    assert_eq!(
        *config.retry.policy().backoff_step(),
        Duration::from_millis(500)
    );
    assert_eq!(config.retry.max_jitter_secs, 1.0);
    Ok(())
}

#[test]
fn test_explicit_file_in_load_chain() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[gateway]\ntimeout_secs = 15\n\n[analysis]\nfeedback_language = \"English\"")?;

    let config = MoodcanvasConfig::load(Some(file.path()))?;

    assert_eq!(config.gateway.timeout_secs, 15);
    assert_eq!(config.analysis.feedback_language, "English");
    assert_eq!(*config.gateway.endpoints()?.timeout(), Duration::from_secs(15));
    Ok(())
}

#[test]
fn test_explicit_file_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[models]\nimage_model = \"prompthero/openjourney\"")?;

    let config = MoodcanvasConfig::from_file(file.path())?;

    assert_eq!(config.models.image_model, "prompthero/openjourney");
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("absent.toml");

    let err = MoodcanvasConfig::from_file(&missing).err().ok_or("expected an error")?;
    assert!(err.detail().starts_with("Failed to build configuration"));
    Ok(())
}

#[test]
fn test_wrong_type_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let err = MoodcanvasConfig::from_toml_str("[retry]\nmax_retries_per_model = \"lots\"")
        .err()
        .ok_or("expected an error")?;

    assert!(err.detail().starts_with("Failed to parse configuration"));
    Ok(())
}

#[test]
fn test_analyzer_settings_follow_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = MoodcanvasConfig::from_toml_str(
        "[gateway]\nmax_tokens = 300\ntemperature = 0.25\n\n[analysis]\nfeedback_language = \"Japanese\"",
    )?;

    let settings = config.analyzer_settings();
    assert_eq!(settings.max_tokens, 300);
    assert_eq!(settings.temperature, 0.25);
    assert_eq!(settings.feedback_language, "Japanese");
    Ok(())
}

#[test]
fn test_candidate_order() -> Result<(), Box<dyn std::error::Error>> {
    let config = MoodcanvasConfig::bundled()?;

    let default_order = candidate_models(&config.models, None);
    assert_eq!(default_order.preferred(), Some("runwayml/stable-diffusion-v1-5"));
    assert_eq!(default_order.len(), 4);

    let custom = candidate_models(&config.models, Some("someone/custom-sd"));
    assert_eq!(custom.preferred(), Some("someone/custom-sd"));
    assert_eq!(custom.len(), 5);

    let blank = candidate_models(&config.models, Some("   "));
    assert_eq!(blank, default_order);
    Ok(())
}
