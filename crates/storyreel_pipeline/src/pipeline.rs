//! The five-stage pipeline state machine.

use crate::{BatchProgress, PipelineStage, SceneVideoBatch};
use storyreel_core::{
    GenerationResult, Storyboard, StoryboardRequest, StoryRequest, StyleModifiers,
};
use storyreel_error::{BadInputError, StoryreelResult};
use storyreel_interface::VideoGeneration;
use tokio::sync::watch;
use tracing::{info, instrument};

/// Cap on how many scenes are pre-selected after storyboard generation.
///
/// The operator can raise the selection up to the full scene count with
/// [`StoryPipeline::set_selected_count`].
pub const MAX_SELECTED_SCENES: usize = 5;

/// Outputs accumulated as the pipeline advances.
///
/// Each field belongs to the stage that produces it: `story` to the story
/// stage, `storyboard` and `selected_count` to the storyboard stage,
/// `results` to the batch-video stage. Stepping back discards the current
/// stage's state and keeps everything earlier.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    story: Option<String>,
    storyboard: Option<Storyboard>,
    selected_count: usize,
    results: Vec<GenerationResult>,
}

impl PipelineContext {
    /// The generated story, if the story stage has completed.
    pub fn story(&self) -> Option<&str> {
        self.story.as_deref()
    }

    /// The parsed storyboard, if the storyboard stage has completed.
    pub fn storyboard(&self) -> Option<&Storyboard> {
        self.storyboard.as_ref()
    }

    /// How many scenes the batch stage will process.
    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    /// Per-scene outcomes from the most recent batch run.
    pub fn results(&self) -> &[GenerationResult] {
        &self.results
    }
}

/// Drives an idea through story, storyboard, batch video, and final
/// review, one stage at a time.
///
/// Transitions only advance on success: a failed generation call surfaces
/// its error and leaves the stage (and all accumulated state) unchanged,
/// so the operator can retry by re-invoking the same operation.
///
/// # Examples
///
/// ```no_run
/// use storyreel_core::StoryRequest;
/// use storyreel_pipeline::StoryPipeline;
/// # use storyreel_models::{GeminiClient, PlaceholderVideo};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let driver = PlaceholderVideo::new(GeminiClient::new("key")?);
/// let mut pipeline = StoryPipeline::new(driver);
///
/// let request = StoryRequest::builder()
///     .prompt("A robot finds a garden")
///     .build()?;
/// pipeline.generate_story(request).await?;
/// pipeline.generate_storyboard().await?;
/// pipeline.generate_videos().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StoryPipeline<D> {
    driver: D,
    stage: PipelineStage,
    context: PipelineContext,
    style: StyleModifiers,
    storyboard_model: Option<String>,
    progress: watch::Sender<BatchProgress>,
}

impl<D> StoryPipeline<D> {
    /// Create a pipeline at the idea stage.
    pub fn new(driver: D) -> Self {
        let (progress, _) = BatchProgress::channel();
        Self {
            driver,
            stage: PipelineStage::Idea,
            context: PipelineContext::default(),
            style: StyleModifiers::default(),
            storyboard_model: None,
            progress,
        }
    }

    /// Apply style modifiers to every generation prompt.
    pub fn with_style(mut self, style: StyleModifiers) -> Self {
        self.style = style;
        self
    }

    /// Override the model used for storyboard generation.
    pub fn with_storyboard_model(mut self, model: impl Into<String>) -> Self {
        self.storyboard_model = Some(model.into());
        self
    }

    /// The current stage.
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Accumulated outputs.
    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    /// Subscribe to batch progress snapshots.
    ///
    /// Grab a receiver before invoking [`generate_videos`] to observe the
    /// run as it happens.
    ///
    /// [`generate_videos`]: StoryPipeline::generate_videos
    pub fn progress(&self) -> watch::Receiver<BatchProgress> {
        self.progress.subscribe()
    }

    fn require_stage(&self, expected: PipelineStage, operation: &str) -> StoryreelResult<()> {
        if self.stage != expected {
            return Err(BadInputError::new(format!(
                "{} requires the {} stage (currently at {})",
                operation, expected, self.stage
            ))
            .into());
        }
        Ok(())
    }

    /// Step back to the immediately preceding stage.
    ///
    /// Discards only the current stage's output; predecessor outputs are
    /// retained and never re-fetched. A no-op at the idea stage.
    pub fn back(&mut self) -> PipelineStage {
        match self.stage {
            PipelineStage::Idea => {}
            PipelineStage::Story => {
                self.context.story = None;
            }
            PipelineStage::Storyboard => {
                self.context.storyboard = None;
                self.context.selected_count = 0;
            }
            PipelineStage::BatchVideo => {
                self.context.results.clear();
            }
            PipelineStage::Final => {}
        }
        if let Some(previous) = self.stage.previous() {
            self.stage = previous;
        }
        self.stage
    }

    /// Reset to the idea stage, clearing all accumulated state.
    pub fn restart(&mut self) {
        info!("Pipeline restarted");
        self.stage = PipelineStage::Idea;
        self.context = PipelineContext::default();
        self.progress.send_replace(BatchProgress::idle());
    }
}

impl<D: VideoGeneration> StoryPipeline<D> {
    /// Generate story prose from the operator's idea.
    ///
    /// Advances idea → story. The request's style modifiers are replaced
    /// with the pipeline's own.
    ///
    /// # Errors
    ///
    /// `BadInputError` when the prompt is empty or the pipeline is not at
    /// the idea stage; upstream failures pass through. The stage is
    /// unchanged on any error.
    #[instrument(skip(self, req))]
    pub async fn generate_story(&mut self, mut req: StoryRequest) -> StoryreelResult<String> {
        self.require_stage(PipelineStage::Idea, "generate_story")?;
        if req.prompt.trim().is_empty() {
            return Err(BadInputError::new("Story idea is required").into());
        }

        req.style = self.style.clone();
        let story = self.driver.generate_story(&req).await?;

        self.context.story = Some(story.clone());
        self.stage = PipelineStage::Story;
        info!(stage = %self.stage, "Story stage complete");
        Ok(story)
    }

    /// Break the generated story into a storyboard.
    ///
    /// Advances story → storyboard and pre-selects
    /// `min(scene_count, MAX_SELECTED_SCENES)` scenes for the batch.
    ///
    /// # Errors
    ///
    /// `BadInputError` at the wrong stage; upstream and schema failures
    /// pass through. The stage is unchanged on any error.
    #[instrument(skip(self))]
    pub async fn generate_storyboard(&mut self) -> StoryreelResult<&Storyboard> {
        self.require_stage(PipelineStage::Story, "generate_storyboard")?;
        let story = self
            .context
            .story
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| BadInputError::new("Story content is required"))?;

        let req = StoryboardRequest {
            story,
            model: self.storyboard_model.clone(),
            style: self.style.clone(),
        };
        let storyboard = self.driver.generate_storyboard(&req).await?;

        self.context.selected_count = storyboard.len().min(MAX_SELECTED_SCENES);
        self.stage = PipelineStage::Storyboard;
        info!(
            scenes = storyboard.len(),
            selected = self.context.selected_count,
            "Storyboard stage complete"
        );
        Ok(self.context.storyboard.insert(storyboard))
    }

    /// Adjust how many scenes the batch stage will process.
    ///
    /// # Errors
    ///
    /// `BadInputError` when out of `1..=scene_count` or at the wrong
    /// stage.
    pub fn set_selected_count(&mut self, count: usize) -> StoryreelResult<()> {
        self.require_stage(PipelineStage::Storyboard, "set_selected_count")?;
        let scene_count = self.context.storyboard.as_ref().map_or(0, Storyboard::len);
        if count == 0 || count > scene_count {
            return Err(BadInputError::new(format!(
                "Selected scene count {} is out of range (1..={})",
                count, scene_count
            ))
            .into());
        }
        self.context.selected_count = count;
        Ok(())
    }

    /// Run the scene-video batch over the selected scenes.
    ///
    /// Advances storyboard → batch-video when the run starts and on to
    /// final when the batch completes; partial success is accepted.
    /// Per-scene failures are recorded in the results, never propagated.
    /// Progress is observable through [`progress`] while the run is in
    /// flight.
    ///
    /// # Errors
    ///
    /// `BadInputError` at the wrong stage or when the selected count is
    /// out of range; in both cases no scenes are processed and the stage
    /// is unchanged.
    ///
    /// [`progress`]: StoryPipeline::progress
    #[instrument(skip(self))]
    pub async fn generate_videos(&mut self) -> StoryreelResult<&[GenerationResult]> {
        self.require_stage(PipelineStage::Storyboard, "generate_videos")?;
        let storyboard = self
            .context
            .storyboard
            .as_ref()
            .ok_or_else(|| BadInputError::new("Storyboard is required"))?;

        let batch = SceneVideoBatch::new(
            storyboard.scenes.clone(),
            self.context.selected_count,
            self.style.clone(),
        );
        batch.validate_count()?;

        self.stage = PipelineStage::BatchVideo;
        let results = batch.run(&self.driver, &self.progress).await?;

        self.context.results = results;
        self.stage = PipelineStage::Final;
        info!(
            results = self.context.results.len(),
            failures = self
                .context
                .results
                .iter()
                .filter(|r| !r.is_success())
                .count(),
            "Batch video stage complete"
        );
        Ok(&self.context.results)
    }
}
