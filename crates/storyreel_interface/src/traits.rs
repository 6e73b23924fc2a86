//! Trait definitions for generation backends and their capabilities.

use async_trait::async_trait;
use storyreel_core::{
    Capability, GeneratedImage, ImageRequest, SceneVideoRequest, Storyboard, StoryboardRequest,
    StoryRequest, VideoClip,
};
use storyreel_error::StoryreelResult;

/// Core trait that all generation backends must implement.
///
/// This provides the two single-shot text capabilities the pipeline's
/// all-or-nothing stages depend on. Additional capabilities are exposed
/// through optional traits.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate free-text story prose from an idea prompt.
    async fn generate_story(&self, req: &StoryRequest) -> StoryreelResult<String>;

    /// Break a story into an ordered, schema-validated scene list.
    async fn generate_storyboard(&self, req: &StoryboardRequest) -> StoryreelResult<Storyboard>;

    /// Provider name (e.g., "gemini", "placeholder").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-1.5-flash-latest").
    fn model_name(&self) -> &str;

    /// The capabilities this backend serves.
    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::Story, Capability::Storyboard]
    }
}

/// Trait for backends that can render one video clip per scene.
///
/// Implementations must treat each call as independent: a failed call for
/// one scene carries no state into the next. The batch runner relies on
/// this to isolate per-scene failures.
#[async_trait]
pub trait VideoGeneration: GenerationDriver {
    /// Generate one clip for a single scene.
    async fn generate_clip(&self, req: &SceneVideoRequest) -> StoryreelResult<VideoClip>;
}

/// Trait for backends that can generate still images.
///
/// Image generation stands apart from the text capabilities: a backend may
/// offer images without offering story or storyboard generation at all.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Generate one or more images for a prompt.
    async fn generate_image(&self, req: &ImageRequest) -> StoryreelResult<Vec<GeneratedImage>>;
}
