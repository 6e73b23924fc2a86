//! Generation backend implementations for Storyreel.
//!
//! This crate provides the concrete clients behind the
//! [`storyreel_interface`] traits:
//!
//! - [`GeminiClient`]: story and storyboard generation over the Google
//!   Generative Language REST API.
//! - [`PlaceholderVideo`]: the stubbed scene-video capability, wrapping any
//!   text driver and fabricating deterministic clip handles.
//! - [`VertexImagenClient`]: still image generation via the Vertex AI
//!   Imagen predict endpoint, with an explicit not-implemented contract
//!   when the Vertex configuration is incomplete.
//!
//! Configuration is loaded from `storyreel.toml` and environment variables
//! (see [`ReelConfig`]); credentials are treated as read-only inputs to
//! every call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod extraction;
mod gemini;
mod imagen;
mod video;

pub use config::{GeminiSettings, ReelConfig, VertexSettings};
pub use extraction::extract_json;
pub use gemini::GeminiClient;
pub use imagen::VertexImagenClient;
pub use video::PlaceholderVideo;
