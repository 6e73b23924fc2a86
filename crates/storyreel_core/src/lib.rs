//! Core data types for the Storyreel generation pipeline.
//!
//! This crate provides the foundation data types shared by the client
//! backends and the pipeline orchestration layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod clip;
mod image;
mod request;
mod result;
mod scene;
mod style;

pub use capability::Capability;
pub use clip::{ClipStatus, VideoClip};
pub use image::{AspectRatio, GeneratedImage, SafetyFilterLevel};
pub use request::{
    ImageRequest, ImageRequestBuilder, SceneVideoRequest, StoryRequest, StoryRequestBuilder,
    StoryboardRequest, StoryboardRequestBuilder,
};
pub use result::GenerationResult;
pub use scene::{Scene, Storyboard};
pub use style::StyleModifiers;
