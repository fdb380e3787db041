//! Moodcanvas CLI binary.
//!
//! This binary provides command-line access to Moodcanvas:
//! - Analyze a diary entry
//! - Generate the mood image with model fallback
//! - Check the access token and list candidate models

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, Session, run_analyze, run_check_token, run_models, run_visualize};

    // .env must be loaded before parsing so HUGGINGFACE_TOKEN can fill --token
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::open(cli.config.as_deref(), cli.token.as_deref())?;
    let visualizer = session.visualizer(cli.text_model.as_deref(), cli.image_model.as_deref());

    let code = match cli.command {
        Commands::Analyze { input } => run_analyze(&visualizer, &input.read()?).await?,
        Commands::Visualize { input, out } => {
            run_visualize(&visualizer, &input.read()?, &out).await?
        }
        Commands::CheckToken => run_check_token(&session).await?,
        Commands::Models => run_models(&visualizer),
    };

    Ok(code)
}
