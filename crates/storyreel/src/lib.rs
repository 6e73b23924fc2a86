//! Storyreel - Staged story-to-video generation.
//!
//! Storyreel turns a one-line idea into story prose, breaks the prose
//! into a storyboard of scenes, and renders a video clip per selected
//! scene, one stage at a time. The batch stage tolerates per-scene
//! failures: one bad scene is recorded and the rest keep going.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyreel::{GeminiClient, PlaceholderVideo, StoryPipeline, StoryRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = PlaceholderVideo::new(GeminiClient::from_env()?);
//!     let mut pipeline = StoryPipeline::new(driver);
//!
//!     let request = StoryRequest::builder()
//!         .prompt("A robot finds a garden")
//!         .build()?;
//!     pipeline.generate_story(request).await?;
//!     pipeline.generate_storyboard().await?;
//!     let results = pipeline.generate_videos().await?;
//!     println!("{} clips generated", results.iter().filter(|r| r.is_success()).count());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Storyreel is organized as a workspace with focused crates:
//!
//! - `storyreel_core` - Data types (Scene, Storyboard, VideoClip, etc.)
//! - `storyreel_interface` - GenerationDriver trait family
//! - `storyreel_error` - Error types
//! - `storyreel_models` - Backend implementations (Gemini, Vertex Imagen)
//! - `storyreel_pipeline` - Batch runner and pipeline state machine
//!
//! This crate (`storyreel`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use storyreel_core::*;
pub use storyreel_error::*;
pub use storyreel_interface::*;
pub use storyreel_models::*;
pub use storyreel_pipeline::*;
