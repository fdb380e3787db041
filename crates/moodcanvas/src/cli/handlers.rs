//! Command handlers.

use moodcanvas::{
    AccountInfo, AnalysisResult, CancellationToken, Credential, DiaryVisualizer,
    HuggingFaceGateway, InferenceGateway, MoodcanvasConfig, MoodcanvasResult, StatusEvent,
    build_gateway,
};
use moodcanvas_analysis::{CREDENTIAL_MESSAGE, describe_failure};
use moodcanvas_core::EmotionalAnalysis;
use moodcanvas_error::{StorageError, StorageErrorKind};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, instrument, warn};

/// Configuration and gateway shared by every command.
pub struct Session {
    config: MoodcanvasConfig,
    gateway: HuggingFaceGateway,
}

impl Session {
    /// Loads configuration and builds the gateway.
    ///
    /// An invalid token is reported and treated as absent, so commands that
    /// need it fail with a clear message instead of an HTTP 401.
    pub fn open(config_path: Option<&Path>, token: Option<&str>) -> MoodcanvasResult<Self> {
        let config = MoodcanvasConfig::load(config_path)?;
        let credential = match token.map(Credential::new).transpose() {
            Ok(credential) => credential,
            Err(e) => {
                warn!(error = %e.detail(), "Ignoring invalid access token");
                None
            }
        };
        let gateway = build_gateway(&config, credential)?;
        Ok(Self { config, gateway })
    }

    /// A visualizer honoring the CLI model overrides.
    pub fn visualizer(
        &self,
        text_model: Option<&str>,
        image_model: Option<&str>,
    ) -> DiaryVisualizer<HuggingFaceGateway> {
        let mut visualizer = DiaryVisualizer::new(self.gateway.clone(), &self.config);
        if let Some(model) = text_model {
            visualizer = visualizer.with_text_model(model);
        }
        if let Some(model) = image_model {
            visualizer = visualizer.with_image_model(model);
        }
        visualizer
    }
}

fn print_analysis(analysis: &EmotionalAnalysis) {
    println!("Emotion:      {}", analysis.emotion_or_default());
    println!("Feedback:     {}", analysis.feedback_or_default());
    println!(
        "Image prompt: {}",
        analysis.image_prompt_text().unwrap_or("(none)")
    );
    if !analysis.is_structured() {
        println!("(the model did not answer in the requested format: {})", analysis.format());
    }
}

fn report(result: &AnalysisResult) -> bool {
    match result {
        AnalysisResult::Success(analysis) => {
            print_analysis(analysis);
            true
        }
        AnalysisResult::Failure { error_message } => {
            eprintln!("Analysis failed: {}", error_message);
            false
        }
    }
}

/// `moodcanvas analyze`
#[instrument(skip_all)]
pub async fn run_analyze(
    visualizer: &DiaryVisualizer<HuggingFaceGateway>,
    diary: &str,
) -> MoodcanvasResult<ExitCode> {
    let result = visualizer.analyze(diary).await;
    Ok(if report(&result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `moodcanvas visualize`
///
/// Ctrl-C stops image generation at the next call or wait.
#[instrument(skip_all, fields(out = %out.display()))]
pub async fn run_visualize(
    visualizer: &DiaryVisualizer<HuggingFaceGateway>,
    diary: &str,
    out: &Path,
) -> MoodcanvasResult<ExitCode> {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let print_status = |event: &StatusEvent| eprintln!("{}", event);
    let visualization = visualizer
        .visualize_with_cancel(diary, Some(&print_status), &cancel)
        .await;
    ctrl_c.abort();

    if !report(visualization.analysis()) {
        return Ok(ExitCode::FAILURE);
    }

    let Some((image, model)) = visualization.into_parts().1.and_then(|r| r.into_parts()) else {
        eprintln!("No image could be generated. Please try again later or pick another model.");
        return Ok(ExitCode::FAILURE);
    };

    write_image(out, image.bytes())?;
    info!(model = %model, bytes = image.len(), "Image saved");
    println!("Image saved to {} (model: {})", out.display(), model);
    Ok(ExitCode::SUCCESS)
}

fn write_image(out: &Path, bytes: &[u8]) -> MoodcanvasResult<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }
    std::fs::write(out, bytes).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            out.display(),
            e
        )))
    })?;
    Ok(())
}

/// `moodcanvas check-token`
#[instrument(skip_all)]
pub async fn run_check_token(session: &Session) -> MoodcanvasResult<ExitCode> {
    if !session.gateway.is_ready() {
        eprintln!("{}", CREDENTIAL_MESSAGE);
        return Ok(ExitCode::FAILURE);
    }

    match session.gateway.whoami().await {
        Ok(name) => {
            println!("Token accepted (account: {})", name);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Token check failed: {}", describe_failure(&e, "whoami"));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// `moodcanvas models`
pub fn run_models(visualizer: &DiaryVisualizer<HuggingFaceGateway>) -> ExitCode {
    println!("Text model: {}", visualizer.models().text_model);
    println!("Image models (in trial order):");
    for (rank, model) in visualizer.candidates().iter().enumerate() {
        println!("  {}. {}", rank + 1, model);
    }
    ExitCode::SUCCESS
}
