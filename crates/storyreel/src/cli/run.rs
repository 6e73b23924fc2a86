//! Handlers for the pipeline-driving commands.

use std::path::Path;
use storyreel_core::{StoryRequest, StoryboardRequest, StyleModifiers};
use storyreel_error::{BadInputError, StoryreelResult};
use storyreel_interface::GenerationDriver;
use storyreel_models::{GeminiClient, PlaceholderVideo, ReelConfig};
use storyreel_pipeline::StoryPipeline;
use tracing::info;

fn gemini_from_config() -> StoryreelResult<(GeminiClient, Option<String>)> {
    let config = ReelConfig::load()?;
    let client = GeminiClient::new(config.gemini_api_key()?)?;
    Ok((client, config.gemini.model))
}

/// Run the full pipeline and print the outcome of every stage.
pub async fn run_pipeline(
    idea: &str,
    genre: Option<String>,
    tone: Option<String>,
    scenes: Option<usize>,
    style: StyleModifiers,
) -> StoryreelResult<()> {
    let (client, storyboard_model) = gemini_from_config()?;
    let driver = PlaceholderVideo::new(client);
    let mut pipeline = StoryPipeline::new(driver).with_style(style);
    if let Some(model) = storyboard_model {
        pipeline = pipeline.with_storyboard_model(model);
    }

    let mut request = StoryRequest::builder();
    request.prompt(idea);
    if let Some(genre) = genre {
        request.genre(genre);
    }
    if let Some(tone) = tone {
        request.tone(tone);
    }
    let request = request
        .build()
        .map_err(|e| storyreel_error::BuilderError::from(e.to_string()))?;

    let story = pipeline.generate_story(request).await?;
    println!("--- Story ---\n{story}\n");

    let storyboard = pipeline.generate_storyboard().await?;
    println!("--- Storyboard ({} scenes) ---", storyboard.len());
    for scene in &storyboard.scenes {
        println!("{:>3}. {}", scene.id, scene.description);
    }
    println!();

    if let Some(count) = scenes {
        pipeline.set_selected_count(count)?;
    }

    // Report progress while the batch runs.
    let mut progress = pipeline.progress();
    let reporter = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let snapshot = *progress.borrow();
            if let Some(index) = snapshot.in_flight {
                info!(
                    item = index + 1,
                    total = snapshot.total,
                    "Generating scene video"
                );
            }
        }
    });

    let selected = pipeline.context().selected_count();
    info!(selected, "Starting scene video batch");
    pipeline.generate_videos().await?;
    reporter.abort();

    println!("--- Results ---");
    for result in pipeline.context().results() {
        match result.clip() {
            Some(clip) => println!("{:>3}. {} ({}s)", result.scene_id(), clip.video_url, clip.duration_secs),
            None => println!(
                "{:>3}. FAILED: {}",
                result.scene_id(),
                result.failure_message().unwrap_or("unknown")
            ),
        }
    }

    let successes = pipeline
        .context()
        .results()
        .iter()
        .filter(|r| r.is_success())
        .count();
    info!(successes, total = pipeline.context().results().len(), "Pipeline complete");
    Ok(())
}

/// Generate story prose from an idea and print it.
pub async fn generate_story(
    idea: &str,
    genre: Option<String>,
    tone: Option<String>,
    style: StyleModifiers,
) -> StoryreelResult<()> {
    let (client, _) = gemini_from_config()?;

    let request = StoryRequest {
        prompt: idea.to_string(),
        genre,
        tone,
        style,
    };
    let story = client.generate_story(&request).await?;
    println!("{story}");
    Ok(())
}

/// Break a story file into a storyboard and print it as JSON.
pub async fn generate_storyboard(story_file: &Path, style: StyleModifiers) -> StoryreelResult<()> {
    let story = std::fs::read_to_string(story_file).map_err(|e| {
        BadInputError::new(format!(
            "Failed to read story file {}: {}",
            story_file.display(),
            e
        ))
    })?;

    let (client, model) = gemini_from_config()?;
    let request = StoryboardRequest {
        story,
        model,
        style,
    };
    let storyboard = client.generate_storyboard(&request).await?;

    let json = serde_json::to_string_pretty(&storyboard)
        .map_err(|e| storyreel_error::JsonError::new(e.to_string()))?;
    println!("{json}");
    Ok(())
}
