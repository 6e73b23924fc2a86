//! Capability-specific request types.

use crate::{AspectRatio, SafetyFilterLevel, Scene, StyleModifiers};
use serde::{Deserialize, Serialize};

/// Request for the story capability.
///
/// # Examples
///
/// ```
/// use storyreel_core::StoryRequest;
///
/// let request = StoryRequest::builder()
///     .prompt("A robot finds a garden")
///     .genre("Science fiction")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt, "A robot finds a garden");
/// assert!(request.tone.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct StoryRequest {
    /// The operator's story idea
    pub prompt: String,
    /// Optional genre hint (prompt defaults to "General")
    pub genre: Option<String>,
    /// Optional tone hint (prompt defaults to "Neutral")
    pub tone: Option<String>,
    /// Style modifiers applied to the prompt
    pub style: StyleModifiers,
}

impl StoryRequest {
    /// Create a builder for a story request.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }
}

/// Request for the storyboard capability.
///
/// # Examples
///
/// ```
/// use storyreel_core::StoryboardRequest;
///
/// let request = StoryboardRequest::builder()
///     .story("Once upon a time...")
///     .model("gemini-1.5-pro-latest")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model.as_deref(), Some("gemini-1.5-pro-latest"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct StoryboardRequest {
    /// The story text to break into scenes
    pub story: String,
    /// Optional model selector overriding the client default
    pub model: Option<String>,
    /// Style modifiers applied to the prompt
    pub style: StyleModifiers,
}

impl StoryboardRequest {
    /// Create a builder for a storyboard request.
    pub fn builder() -> StoryboardRequestBuilder {
        StoryboardRequestBuilder::default()
    }
}

/// Request for the scene-video capability: one scene plus shared style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneVideoRequest {
    /// The scene to render
    pub scene: Scene,
    /// Style modifiers shared across the batch
    pub style: StyleModifiers,
}

impl SceneVideoRequest {
    /// Build a request for one scene with shared style modifiers.
    pub fn new(scene: Scene, style: StyleModifiers) -> Self {
        Self { scene, style }
    }
}

/// Request for the image capability (Vertex AI Imagen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct ImageRequest {
    /// Image generation prompt
    pub prompt: String,
    /// Output aspect ratio (service default: 1:1; pipeline default: 16:9)
    pub aspect_ratio: Option<AspectRatio>,
    /// Things the model should avoid rendering
    pub negative_prompt: Option<String>,
    /// How many samples to request (default 1)
    pub number_of_images: Option<u32>,
    /// Safety filter strictness (default block_some)
    pub safety_filter_level: Option<SafetyFilterLevel>,
}

impl ImageRequest {
    /// Create a builder for an image request.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}
