//! Generation capability identifiers.

use serde::{Deserialize, Serialize};

/// A named kind of generation request.
///
/// Each capability is a distinct request/response boundary against the
/// hosted model APIs.
///
/// # Examples
///
/// ```
/// use storyreel_core::Capability;
///
/// assert_eq!(format!("{}", Capability::SceneVideo), "scene-video");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Free-text short story generation
    Story,
    /// JSON-structured scene breakdown of a story
    Storyboard,
    /// One video clip for a single scene
    SceneVideo,
    /// Still image generation (Vertex AI Imagen)
    Image,
}
