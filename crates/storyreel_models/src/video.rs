//! Placeholder scene-video backend.
//!
//! Real video generation is not wired up yet; this decorator adds the
//! scene-video capability to any text driver by fabricating deterministic
//! clip handles. The contract (validation, clip shape, per-call isolation)
//! matches what a real backend will honor, so the batch runner and the
//! pipeline above it are exercised against the final interface.

use async_trait::async_trait;
use storyreel_core::{
    Capability, ClipStatus, SceneVideoRequest, Storyboard, StoryboardRequest, StoryRequest,
    VideoClip,
};
use storyreel_error::{BadInputError, StoryreelResult};
use storyreel_interface::{GenerationDriver, VideoGeneration};
use tracing::{info, instrument};

/// Duration reported for every placeholder clip, in seconds.
pub const PLACEHOLDER_CLIP_SECS: f32 = 5.0;

/// Decorator that adds a stubbed scene-video capability to a text driver.
///
/// Story and storyboard calls delegate to the inner driver unchanged;
/// `generate_clip` validates the scene and returns a deterministic handle
/// derived from the scene id.
///
/// # Examples
///
/// ```no_run
/// use storyreel_models::{GeminiClient, PlaceholderVideo};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let driver = PlaceholderVideo::new(GeminiClient::new("api-key")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderVideo<D> {
    inner: D,
}

impl<D> PlaceholderVideo<D> {
    /// Wrap a text driver with the placeholder video capability.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// The wrapped text driver.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

#[async_trait]
impl<D: GenerationDriver> GenerationDriver for PlaceholderVideo<D> {
    async fn generate_story(&self, req: &StoryRequest) -> StoryreelResult<String> {
        self.inner.generate_story(req).await
    }

    async fn generate_storyboard(&self, req: &StoryboardRequest) -> StoryreelResult<Storyboard> {
        self.inner.generate_storyboard(req).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    fn capabilities(&self) -> Vec<Capability> {
        let mut capabilities = self.inner.capabilities();
        capabilities.push(Capability::SceneVideo);
        capabilities
    }
}

#[async_trait]
impl<D: GenerationDriver> VideoGeneration for PlaceholderVideo<D> {
    #[instrument(skip(self, req), fields(scene_id = req.scene.id))]
    async fn generate_clip(&self, req: &SceneVideoRequest) -> StoryreelResult<VideoClip> {
        if req.scene.description.trim().is_empty() {
            return Err(BadInputError::new("Scene description is required").into());
        }

        let clip = VideoClip {
            scene_id: req.scene.id,
            video_url: format!("https://placeholder-video-{}.mp4", req.scene.id),
            duration_secs: PLACEHOLDER_CLIP_SECS,
            status: ClipStatus::Complete,
        };

        info!(url = %clip.video_url, "Placeholder clip generated");
        Ok(clip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::{Scene, StyleModifiers};

    #[derive(Debug)]
    struct NullDriver;

    #[async_trait]
    impl GenerationDriver for NullDriver {
        async fn generate_story(&self, _req: &StoryRequest) -> StoryreelResult<String> {
            Ok(String::new())
        }

        async fn generate_storyboard(
            &self,
            _req: &StoryboardRequest,
        ) -> StoryreelResult<Storyboard> {
            Ok(Storyboard::default())
        }

        fn provider_name(&self) -> &'static str {
            "null"
        }

        fn model_name(&self) -> &str {
            "null"
        }
    }

    fn scene(id: u32, description: &str) -> Scene {
        Scene {
            id,
            description: description.to_string(),
            visual_prompt: "wide shot".to_string(),
        }
    }

    #[tokio::test]
    async fn clip_handle_derives_from_scene_id() {
        let driver = PlaceholderVideo::new(NullDriver);
        let req = SceneVideoRequest::new(scene(7, "A robot waters a fern"), StyleModifiers::default());

        let clip = driver.generate_clip(&req).await.unwrap();
        assert_eq!(clip.scene_id, 7);
        assert_eq!(clip.video_url, "https://placeholder-video-7.mp4");
        assert_eq!(clip.duration_secs, PLACEHOLDER_CLIP_SECS);
        assert_eq!(clip.status, ClipStatus::Complete);
    }

    #[test]
    fn wrapping_adds_the_scene_video_capability() {
        let driver = PlaceholderVideo::new(NullDriver);
        assert!(driver.capabilities().contains(&Capability::SceneVideo));
        assert!(driver.capabilities().contains(&Capability::Story));
    }

    #[tokio::test]
    async fn empty_description_is_rejected() {
        let driver = PlaceholderVideo::new(NullDriver);
        let req = SceneVideoRequest::new(scene(1, "   "), StyleModifiers::default());

        assert!(driver.generate_clip(&req).await.is_err());
    }
}
