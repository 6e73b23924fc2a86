//! Mock generation driver for testing.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use storyreel_core::{
    ClipStatus, Scene, SceneVideoRequest, Storyboard, StoryboardRequest, StoryRequest, VideoClip,
};
use storyreel_error::{StoryreelResult, UpstreamError};
use storyreel_interface::{GenerationDriver, VideoGeneration};
use storyreel_pipeline::BatchProgress;
use tokio::sync::watch;

/// Behavior configuration for mock clip generation.
#[derive(Debug, Clone)]
pub enum ClipBehavior {
    /// Every clip call succeeds
    Success,
    /// Clip calls fail for the listed scene ids, succeed otherwise
    FailingScenes(HashSet<u32>),
    /// Every clip call fails with the given message
    Error(String),
}

/// Mock driver for testing the batch runner and pipeline.
///
/// Tests control the story, storyboard, and per-scene clip outcomes
/// without making API calls. When given a progress receiver, the mock
/// records the progress snapshot visible at the start of each clip call,
/// which lets tests assert what an observer sees mid-run.
pub struct MockDriver {
    story: StoryreelResult<String>,
    storyboard: StoryreelResult<Storyboard>,
    clips: ClipBehavior,
    call_count: Arc<Mutex<usize>>,
    clip_call_count: Arc<Mutex<usize>>,
    progress_rx: Mutex<Option<watch::Receiver<BatchProgress>>>,
    observed: Arc<Mutex<Vec<BatchProgress>>>,
}

impl MockDriver {
    /// A driver where every capability succeeds.
    pub fn new_success(story: impl Into<String>, storyboard: Storyboard) -> Self {
        Self {
            story: Ok(story.into()),
            storyboard: Ok(storyboard),
            clips: ClipBehavior::Success,
            call_count: Arc::new(Mutex::new(0)),
            clip_call_count: Arc::new(Mutex::new(0)),
            progress_rx: Mutex::new(None),
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver whose story capability fails upstream.
    pub fn new_story_error(message: impl Into<String>) -> Self {
        Self {
            story: Err(UpstreamError::api(500, message.into()).into()),
            storyboard: Ok(Storyboard::default()),
            clips: ClipBehavior::Success,
            call_count: Arc::new(Mutex::new(0)),
            clip_call_count: Arc::new(Mutex::new(0)),
            progress_rx: Mutex::new(None),
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A driver whose storyboard capability fails upstream.
    pub fn new_storyboard_error(story: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            story: Ok(story.into()),
            storyboard: Err(UpstreamError::api(500, message.into()).into()),
            clips: ClipBehavior::Success,
            call_count: Arc::new(Mutex::new(0)),
            clip_call_count: Arc::new(Mutex::new(0)),
            progress_rx: Mutex::new(None),
            observed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make clip generation fail for the given scene ids.
    pub fn with_failing_scenes(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.clips = ClipBehavior::FailingScenes(ids.into_iter().collect());
        self
    }

    /// Make every clip call fail.
    pub fn with_clip_error(mut self, message: impl Into<String>) -> Self {
        self.clips = ClipBehavior::Error(message.into());
        self
    }

    /// Record the snapshot seen on `rx` at the start of each clip call.
    pub fn observe_progress(self, rx: watch::Receiver<BatchProgress>) -> Self {
        *self.progress_rx.lock().unwrap() = Some(rx);
        self
    }

    /// Number of story + storyboard calls made.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Number of clip calls made.
    pub fn clip_call_count(&self) -> usize {
        *self.clip_call_count.lock().unwrap()
    }

    /// Progress snapshots recorded during clip calls.
    pub fn observed_progress(&self) -> Vec<BatchProgress> {
        self.observed.lock().unwrap().clone()
    }

    fn clone_result<T: Clone>(result: &StoryreelResult<T>) -> StoryreelResult<T> {
        match result {
            Ok(value) => Ok(value.clone()),
            Err(e) => Err(UpstreamError::api(500, e.to_string()).into()),
        }
    }
}

/// Build a storyboard with sequential scene ids starting at 1.
pub fn storyboard_with(scene_count: u32) -> Storyboard {
    Storyboard {
        scenes: (1..=scene_count)
            .map(|id| Scene {
                id,
                description: format!("Scene {id} of the robot garden story"),
                visual_prompt: format!("cinematic shot {id}, soft morning light"),
            })
            .collect(),
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate_story(&self, _req: &StoryRequest) -> StoryreelResult<String> {
        *self.call_count.lock().unwrap() += 1;
        Self::clone_result(&self.story)
    }

    async fn generate_storyboard(&self, _req: &StoryboardRequest) -> StoryreelResult<Storyboard> {
        *self.call_count.lock().unwrap() += 1;
        Self::clone_result(&self.storyboard)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}

#[async_trait]
impl VideoGeneration for MockDriver {
    async fn generate_clip(&self, req: &SceneVideoRequest) -> StoryreelResult<VideoClip> {
        *self.clip_call_count.lock().unwrap() += 1;

        if let Some(rx) = self.progress_rx.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(*rx.borrow());
        }
        tokio::task::yield_now().await;

        let failed = match &self.clips {
            ClipBehavior::Success => None,
            ClipBehavior::FailingScenes(ids) => ids
                .contains(&req.scene.id)
                .then(|| format!("Scene {} rejected upstream", req.scene.id)),
            ClipBehavior::Error(message) => Some(message.clone()),
        };
        if let Some(message) = failed {
            return Err(UpstreamError::api(500, message).into());
        }

        Ok(VideoClip {
            scene_id: req.scene.id,
            video_url: format!("https://mock-video-{}.mp4", req.scene.id),
            duration_secs: 5.0,
            status: ClipStatus::Complete,
        })
    }
}
