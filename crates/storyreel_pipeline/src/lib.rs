//! Sequential batch execution and the pipeline state machine.
//!
//! This crate contains the orchestration core of Storyreel:
//!
//! - [`SceneVideoBatch`]: runs one clip generation per selected scene,
//!   strictly in order, tolerating per-scene failures and publishing
//!   [`BatchProgress`] over a `tokio::sync::watch` channel.
//! - [`StoryPipeline`]: the five-stage state machine (idea, story,
//!   storyboard, batch video, final) that owns accumulated outputs and
//!   enforces the legal transitions between stages.
//!
//! Both are written against the [`storyreel_interface`] traits, so any
//! backend (hosted API, placeholder, test mock) drives them unchanged.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod pipeline;
mod progress;
mod stage;

pub use batch::SceneVideoBatch;
pub use pipeline::{PipelineContext, StoryPipeline, MAX_SELECTED_SCENES};
pub use progress::BatchProgress;
pub use stage::PipelineStage;
