//! Sequential scene-video batch execution.

use crate::BatchProgress;
use storyreel_core::{GenerationResult, Scene, SceneVideoRequest, StyleModifiers};
use storyreel_error::{BadInputError, StoryreelResult};
use storyreel_interface::VideoGeneration;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Runs one clip generation per selected scene, strictly in order.
///
/// The runner processes the first `selected_count` scenes one at a time;
/// generation is never parallel and never reordered. A failed scene is
/// recorded as a [`GenerationResult::Failure`] and the batch moves on, so
/// a completed run always yields exactly `selected_count` results in
/// input order. The only fatal error is pre-loop validation of
/// `selected_count`.
///
/// # Examples
///
/// ```no_run
/// use storyreel_core::StyleModifiers;
/// use storyreel_pipeline::{BatchProgress, SceneVideoBatch};
/// # use storyreel_models::{GeminiClient, PlaceholderVideo};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let driver = PlaceholderVideo::new(GeminiClient::new("key")?);
/// # let scenes = vec![];
/// let batch = SceneVideoBatch::new(scenes, 3, StyleModifiers::default());
/// let (tx, _rx) = BatchProgress::channel();
/// let results = batch.run(&driver, &tx).await?;
/// assert_eq!(results.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SceneVideoBatch {
    scenes: Vec<Scene>,
    selected_count: usize,
    style: StyleModifiers,
}

impl SceneVideoBatch {
    /// Create a batch over the first `selected_count` scenes.
    ///
    /// The count is validated when the batch runs, not here, so an
    /// invalid batch still constructs (and reports the range error
    /// before processing anything).
    pub fn new(scenes: Vec<Scene>, selected_count: usize, style: StyleModifiers) -> Self {
        Self {
            scenes,
            selected_count,
            style,
        }
    }

    /// The number of scenes this batch will process.
    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    pub(crate) fn validate_count(&self) -> StoryreelResult<()> {
        if self.selected_count == 0 || self.selected_count > self.scenes.len() {
            return Err(BadInputError::new(format!(
                "Selected scene count {} is out of range (1..={})",
                self.selected_count,
                self.scenes.len()
            ))
            .into());
        }
        Ok(())
    }

    /// Run the batch, publishing progress snapshots on `progress`.
    ///
    /// # Errors
    ///
    /// Returns a `BadInputError` when `selected_count` is out of range;
    /// in that case zero items are processed and no progress is
    /// published. Per-scene failures are not errors here.
    #[instrument(skip(self, driver, progress), fields(total = self.selected_count))]
    pub async fn run<D: VideoGeneration>(
        &self,
        driver: &D,
        progress: &watch::Sender<BatchProgress>,
    ) -> StoryreelResult<Vec<GenerationResult>> {
        self.validate_count()?;

        let total = self.selected_count;
        progress.send_replace(BatchProgress {
            total,
            completed: 0,
            in_flight: None,
        });

        let mut results = Vec::with_capacity(total);
        for (index, scene) in self.scenes.iter().take(total).enumerate() {
            progress.send_replace(BatchProgress {
                total,
                completed: results.len(),
                in_flight: Some(index),
            });

            results.push(generate_scene(driver, scene, &self.style).await);

            progress.send_replace(BatchProgress {
                total,
                completed: results.len(),
                in_flight: None,
            });
        }

        let failures = results.iter().filter(|r| !r.is_success()).count();
        info!(total, failures, "Batch complete");
        Ok(results)
    }
}

/// Adapt one clip generation call into a result, never an error.
///
/// Each call is independent: a failure here is recorded against its scene
/// and carries no state into the next item.
async fn generate_scene<D: VideoGeneration>(
    driver: &D,
    scene: &Scene,
    style: &StyleModifiers,
) -> GenerationResult {
    let req = SceneVideoRequest::new(scene.clone(), style.clone());
    match driver.generate_clip(&req).await {
        Ok(clip) => GenerationResult::Success {
            scene_id: scene.id,
            clip,
        },
        Err(e) => {
            warn!(scene_id = scene.id, error = %e, "Scene generation failed");
            GenerationResult::Failure {
                scene_id: scene.id,
                message: e.to_string(),
            }
        }
    }
}
