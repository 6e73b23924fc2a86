//! Per-scene generation outcomes.

use crate::VideoClip;
use serde::{Deserialize, Serialize};

/// The outcome of one scene's video generation attempt.
///
/// Created exactly once per scene per batch run and never mutated. A
/// failure for one scene carries only its message; it never aborts sibling
/// scenes' processing.
///
/// # Examples
///
/// ```
/// use storyreel_core::GenerationResult;
///
/// let failed = GenerationResult::Failure {
///     scene_id: 4,
///     message: "upstream 503".to_string(),
/// };
///
/// assert_eq!(failed.scene_id(), 4);
/// assert!(!failed.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenerationResult {
    /// The scene produced a clip
    Success {
        /// Id of the scene that was processed
        scene_id: u32,
        /// The generated clip handle
        clip: VideoClip,
    },
    /// The scene's generation call failed
    Failure {
        /// Id of the scene that was processed
        scene_id: u32,
        /// Error message captured from the failed call
        message: String,
    },
}

impl GenerationResult {
    /// Id of the scene this result belongs to.
    pub fn scene_id(&self) -> u32 {
        match self {
            Self::Success { scene_id, .. } | Self::Failure { scene_id, .. } => *scene_id,
        }
    }

    /// Whether this result is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The generated clip, if this result is a success.
    pub fn clip(&self) -> Option<&VideoClip> {
        match self {
            Self::Success { clip, .. } => Some(clip),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if this result is a failure.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_serialize_with_a_kind_tag() {
        let failed = GenerationResult::Failure {
            scene_id: 4,
            message: "upstream 503".to_string(),
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["kind"], "failure");
        assert_eq!(json["scene_id"], 4);
    }
}
