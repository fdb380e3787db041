//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use moodcanvas_error::{ConfigError, MoodcanvasResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Moodcanvas - turn a diary entry into an emotional reading and a mood image
#[derive(Parser, Debug)]
#[command(name = "moodcanvas")]
#[command(about = "Turn a diary entry into an emotional reading and a mood image", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file, applied over all others
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Hugging Face access token
    #[arg(long, global = true, env = "HUGGINGFACE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Chat model used for analysis
    #[arg(long, global = true)]
    pub text_model: Option<String>,

    /// Preferred image model, tried before the standard fallbacks
    #[arg(long, global = true)]
    pub image_model: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a diary entry and print the emotional reading
    Analyze {
        #[command(flatten)]
        input: DiaryInput,
    },

    /// Analyze a diary entry and generate its mood image
    Visualize {
        #[command(flatten)]
        input: DiaryInput,

        /// Where to write the generated image
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Check that the access token is accepted
    CheckToken,

    /// Print the image models in trial order
    Models,
}

/// Diary text, given inline or as a file.
#[derive(Args, Debug)]
pub struct DiaryInput {
    /// Diary text
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the diary from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl DiaryInput {
    /// The diary text.
    pub fn read(&self) -> MoodcanvasResult<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
                .into()
            }),
            (None, None) => Err(ConfigError::new("Provide diary text or --file <PATH>").into()),
        }
    }
}
