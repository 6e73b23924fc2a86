//! Video clip types.

use serde::{Deserialize, Serialize};

/// Processing status of a generated clip.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ClipStatus {
    /// The clip is ready
    Complete,
    /// The clip is still rendering upstream
    Pending,
}

/// An opaque handle to one generated video clip.
///
/// The scene-video capability is currently a placeholder boundary; the
/// handle is a URL-shaped string and the duration comes from the backend
/// response (defaulting to five seconds, matching the placeholder
/// contract).
///
/// # Examples
///
/// ```
/// use storyreel_core::{ClipStatus, VideoClip};
///
/// let clip = VideoClip {
///     scene_id: 2,
///     video_url: "https://placeholder-video-2.mp4".to_string(),
///     duration_secs: 5.0,
///     status: ClipStatus::Complete,
/// };
///
/// assert_eq!(clip.scene_id, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoClip {
    /// Id of the scene this clip renders
    pub scene_id: u32,
    /// Opaque clip handle (URL)
    pub video_url: String,
    /// Clip duration in seconds
    pub duration_secs: f32,
    /// Upstream processing status
    pub status: ClipStatus,
}
