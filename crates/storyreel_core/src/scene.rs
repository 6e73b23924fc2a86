//! Scene and storyboard types.

use serde::{Deserialize, Serialize};

/// One unit of narrative with an id, description, and a visual prompt.
///
/// Scenes are produced in bulk by the storyboard capability and are
/// immutable once created. Scene ids are caller-assigned, unique within a
/// storyboard, and define the only ordering used for batch processing.
///
/// # Examples
///
/// ```
/// use storyreel_core::Scene;
///
/// let scene = Scene {
///     id: 1,
///     description: "A lonely robot wanders a ruined city".to_string(),
///     visual_prompt: "cinematic wide shot, overcast light, rusted robot".to_string(),
/// };
///
/// assert_eq!(scene.id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene number, unique within one storyboard
    pub id: u32,
    /// What happens in the scene (narrative)
    pub description: String,
    /// Detailed image/video generation prompt for the scene
    pub visual_prompt: String,
}

/// An ordered list of scenes produced by the storyboard capability.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Scene, Storyboard};
///
/// let board = Storyboard {
///     scenes: vec![Scene {
///         id: 1,
///         description: "Opening shot".to_string(),
///         visual_prompt: "golden hour".to_string(),
///     }],
/// };
///
/// assert_eq!(board.len(), 1);
/// assert!(board.first_duplicate_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Storyboard {
    /// Scenes in narrative order
    pub scenes: Vec<Scene>,
}

impl Storyboard {
    /// Number of scenes in the storyboard.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the storyboard contains no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Look up a scene by its id.
    pub fn scene(&self, id: u32) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// First scene id that appears more than once, if any.
    ///
    /// Used by the client boundary to reject storyboards that violate the
    /// id-uniqueness invariant before they flow downstream.
    pub fn first_duplicate_id(&self) -> Option<u32> {
        let mut seen = std::collections::HashSet::new();
        self.scenes.iter().find(|s| !seen.insert(s.id)).map(|s| s.id)
    }
}
