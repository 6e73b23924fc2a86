//! Storyreel CLI binary.
//!
//! Drives the generation pipeline from the command line:
//! - Run the full idea-to-video pipeline
//! - Generate a story or storyboard in isolation
//! - Generate a still image via Vertex AI Imagen

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{generate_image, generate_story, generate_storyboard, run_pipeline, Cli, Commands};

    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            idea,
            genre,
            tone,
            scenes,
            style,
        } => {
            run_pipeline(&idea, genre, tone, scenes, style.into()).await?;
        }

        Commands::Story {
            idea,
            genre,
            tone,
            style,
        } => {
            generate_story(&idea, genre, tone, style.into()).await?;
        }

        Commands::Storyboard { story_file, style } => {
            generate_storyboard(&story_file, style.into()).await?;
        }

        Commands::Image {
            prompt,
            aspect_ratio,
            negative_prompt,
            count,
        } => {
            generate_image(&prompt, aspect_ratio, negative_prompt, count).await?;
        }
    }

    Ok(())
}
