//! Pipeline stage enumeration.

use serde::{Deserialize, Serialize};

/// The five stages of the generation pipeline, in order.
///
/// Forward motion is one stage at a time; there is no skipping. The
/// derived `Ord` follows pipeline order, so stage comparisons read
/// naturally (`stage >= PipelineStage::Storyboard`).
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PipelineStage {
    /// Collecting the operator's idea, genre, and tone
    Idea,
    /// Story prose generated; awaiting storyboard breakdown
    Story,
    /// Storyboard parsed; scene selection open
    Storyboard,
    /// Scene-video batch run
    BatchVideo,
    /// Terminal review stage
    Final,
}

impl PipelineStage {
    /// The stage that follows this one, or `None` from `Final`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idea => Some(Self::Story),
            Self::Story => Some(Self::Storyboard),
            Self::Storyboard => Some(Self::BatchVideo),
            Self::BatchVideo => Some(Self::Final),
            Self::Final => None,
        }
    }

    /// The stage that precedes this one, or `None` from `Idea`.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Idea => None,
            Self::Story => Some(Self::Idea),
            Self::Storyboard => Some(Self::Story),
            Self::BatchVideo => Some(Self::Storyboard),
            Self::Final => Some(Self::BatchVideo),
        }
    }

    /// Whether this is the terminal stage.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Final)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn stages_form_a_total_order() {
        let stages: Vec<PipelineStage> = PipelineStage::iter().collect();
        assert_eq!(stages.len(), 5);
        for pair in stages.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
    }

    #[test]
    fn endpoints_have_no_neighbors_beyond_the_order() {
        assert_eq!(PipelineStage::Idea.previous(), None);
        assert_eq!(PipelineStage::Final.next(), None);
        assert!(PipelineStage::Final.is_terminal());
    }

    #[test]
    fn display_uses_kebab_case() {
        assert_eq!(PipelineStage::BatchVideo.to_string(), "batch-video");
    }
}
