//! Tests for the diary visualizer against a scripted gateway.

use async_trait::async_trait;
use moodcanvas::{
    ChatCompletion, DiaryVisualizer, ImageArtifact, InferenceGateway, MoodcanvasConfig,
    MoodcanvasResult, StatusEvent, StatusState, TextToImage,
};
use moodcanvas_analysis::UNSTRUCTURED_IMAGE_PROMPT;
use moodcanvas_core::ChatRequest;
use moodcanvas_error::{GatewayError, GatewayErrorKind};
use std::sync::{Arc, Mutex};

/// Chat replies are fixed; image calls succeed only for `working_model`.
struct ScriptedGateway {
    reply: String,
    working_model: Option<String>,
    image_calls: Mutex<Vec<(String, String)>>,
    chat_models: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    fn new(reply: &str, working_model: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            working_model: working_model.map(str::to_string),
            image_calls: Mutex::new(Vec::new()),
            chat_models: Mutex::new(Vec::new()),
        })
    }

    fn image_calls(&self) -> Vec<(String, String)> {
        self.image_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn chat_models(&self) -> Vec<String> {
        self.chat_models.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl InferenceGateway for ScriptedGateway {
    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[async_trait]
impl ChatCompletion for ScriptedGateway {
    async fn chat_completion(&self, request: &ChatRequest) -> MoodcanvasResult<String> {
        if let Ok(mut models) = self.chat_models.lock() {
            models.push(request.model().clone());
        }
        Ok(self.reply.clone())
    }
}

#[async_trait]
impl TextToImage for ScriptedGateway {
    async fn text_to_image(&self, prompt: &str, model: &str) -> MoodcanvasResult<ImageArtifact> {
        if let Ok(mut calls) = self.image_calls.lock() {
            calls.push((prompt.to_string(), model.to_string()));
        }
        if self.working_model.as_deref() == Some(model) {
            Ok(ImageArtifact::new(vec![0x89, 0x50, 0x4E, 0x47], Some("image/png".into())))
        } else {
            Err(GatewayError::new(GatewayErrorKind::Http {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
            .into())
        }
    }
}

const STRUCTURED: &str = "{\"emotion\": \"hopeful\", \"feedback\": \"Tomorrow is new.\", \"image_prompt\": \"dawn over rooftops\"}";

fn fast_config() -> Result<MoodcanvasConfig, Box<dyn std::error::Error>> {
    Ok(MoodcanvasConfig::from_toml_str(
        "[retry]\nmax_retries_per_model = 1\nbackoff_step_secs = 1.0\nmax_jitter_secs = 0.0",
    )?)
}

#[tokio::test(start_paused = true)]
async fn test_visualize_uses_preferred_model() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(STRUCTURED, Some("runwayml/stable-diffusion-v1-5"));
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);

    let result = visualizer.visualize("Rough day, better tomorrow.", None).await;

    assert!(result.is_complete());
    let image = result.image().as_ref().ok_or("expected an image attempt")?;
    assert_eq!(image.success_model(), Some("runwayml/stable-diffusion-v1-5"));
    assert_eq!(
        gateway.image_calls(),
        vec![(
            "dawn over rooftops".to_string(),
            "runwayml/stable-diffusion-v1-5".to_string()
        )]
    );
    assert_eq!(gateway.chat_models(), vec!["Qwen/Qwen2.5-72B-Instruct"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_visualize_falls_back_in_configured_order() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(STRUCTURED, Some("prompthero/openjourney"));
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);
    let events = Mutex::new(Vec::new());
    let record = |event: &StatusEvent| {
        if let Ok(mut events) = events.lock() {
            events.push(event.clone());
        }
    };

    let result = visualizer.visualize("Rough day.", Some(&record)).await;

    let image = result.image().as_ref().ok_or("expected an image attempt")?;
    assert_eq!(image.success_model(), Some("prompthero/openjourney"));

    let models: Vec<String> = gateway.image_calls().into_iter().map(|(_, m)| m).collect();
    assert_eq!(
        models,
        vec![
            "runwayml/stable-diffusion-v1-5",
            "runwayml/stable-diffusion-v1-5",
            "CompVis/stable-diffusion-v1-4",
            "CompVis/stable-diffusion-v1-4",
            "prompthero/openjourney",
        ]
    );

    let events = events.lock().map_err(|e| e.to_string())?;
    assert_eq!(events.last().map(|e| *e.state()), Some(StatusState::Complete));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_model_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(STRUCTURED, Some("someone/custom-sd"));
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?)
        .with_text_model("google/gemma-2-9b-it")
        .with_image_model("someone/custom-sd");

    let result = visualizer.visualize("A calm evening.", None).await;

    assert!(result.is_complete());
    assert_eq!(visualizer.candidates().preferred(), Some("someone/custom-sd"));
    assert_eq!(gateway.chat_models(), vec!["google/gemma-2-9b-it"]);
    assert_eq!(gateway.image_calls().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failed_analysis_skips_image() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(STRUCTURED, Some("runwayml/stable-diffusion-v1-5"));
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);

    let result = visualizer.visualize("   ", None).await;

    assert!(result.analysis().error_message().is_some());
    assert!(result.image().is_none());
    assert!(!result.is_complete());
    assert!(gateway.image_calls().is_empty());
    assert!(gateway.chat_models().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_missing_image_prompt_skips_image() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(
        "{\"emotion\": \"quiet\", \"feedback\": \"Be gentle with yourself.\", \"image_prompt\": \"  \"}",
        Some("runwayml/stable-diffusion-v1-5"),
    );
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);

    let result = visualizer.visualize("Nothing much happened.", None).await;

    assert!(result.analysis().analysis().is_some());
    assert!(result.image().is_none());
    assert!(gateway.image_calls().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unstructured_reply_still_gets_an_image() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(
        "It sounds like you need rest.",
        Some("runwayml/stable-diffusion-v1-5"),
    );
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);

    let result = visualizer.visualize("So tired.", None).await;

    assert!(result.is_complete());
    let calls = gateway.image_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, UNSTRUCTURED_IMAGE_PROMPT);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_total_image_failure_keeps_analysis() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = ScriptedGateway::new(STRUCTURED, None);
    let visualizer = DiaryVisualizer::new(Arc::clone(&gateway), &fast_config()?);

    let (analysis, image) = visualizer.visualize("Long week.", None).await.into_parts();

    assert!(analysis.analysis().is_some());
    let image = image.ok_or("expected an image attempt")?;
    assert!(!image.is_success());
    // Four models, two attempts each.
    assert_eq!(gateway.image_calls().len(), 8);
    Ok(())
}
