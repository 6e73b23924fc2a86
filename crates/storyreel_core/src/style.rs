//! Operator-supplied style modifiers applied to generation prompts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Optional style directives appended to generation prompts.
///
/// The global modifier applies to every capability; the remaining fields
/// are capability-specific. Modifiers render as labeled lines appended to
/// the system prompt, matching what the hosted endpoints expect.
///
/// # Examples
///
/// ```
/// use storyreel_core::StyleModifiers;
///
/// let style = StyleModifiers::default()
///     .with_global_modifier("1970s film grain")
///     .with_story_style("noir");
///
/// let block = style.story_block();
/// assert!(block.contains("Global Style: 1970s film grain"));
/// assert!(block.contains("Story Style: noir"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
pub struct StyleModifiers {
    /// Applied to all generation capabilities
    global_modifier: Option<String>,
    /// Specific to story generation
    story_style: Option<String>,
    /// Specific to storyboard/scene descriptions
    visual_style: Option<String>,
    /// Specific to image generation
    image_style: Option<String>,
}

impl StyleModifiers {
    /// Builder method to set the global modifier.
    pub fn with_global_modifier<S: Into<String>>(mut self, modifier: S) -> Self {
        self.global_modifier = Some(modifier.into());
        self
    }

    /// Builder method to set the story style.
    pub fn with_story_style<S: Into<String>>(mut self, style: S) -> Self {
        self.story_style = Some(style.into());
        self
    }

    /// Builder method to set the visual style.
    pub fn with_visual_style<S: Into<String>>(mut self, style: S) -> Self {
        self.visual_style = Some(style.into());
        self
    }

    /// Builder method to set the image style.
    pub fn with_image_style<S: Into<String>>(mut self, style: S) -> Self {
        self.image_style = Some(style.into());
        self
    }

    /// Style block for story prompts (global + story styles).
    pub fn story_block(&self) -> String {
        let mut block = String::new();
        if let Some(global) = &self.global_modifier {
            block.push_str(&format!("\nGlobal Style: {global}"));
        }
        if let Some(story) = &self.story_style {
            block.push_str(&format!("\nStory Style: {story}"));
        }
        block
    }

    /// Style block for storyboard prompts (global + visual styles).
    pub fn visual_block(&self) -> String {
        let mut block = String::new();
        if let Some(global) = &self.global_modifier {
            block.push_str(&format!("\nGlobal Style: {global}"));
        }
        if let Some(visual) = &self.visual_style {
            block.push_str(&format!("\nVisual Style: {visual}"));
        }
        block
    }

    /// Style block for image prompts (global + image styles).
    pub fn image_block(&self) -> String {
        let mut block = String::new();
        if let Some(global) = &self.global_modifier {
            block.push_str(&format!("\nGlobal Style: {global}"));
        }
        if let Some(image) = &self.image_style {
            block.push_str(&format!("\nImage Style: {image}"));
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_modifiers_render_empty_blocks() {
        let style = StyleModifiers::default();
        assert!(style.story_block().is_empty());
        assert!(style.visual_block().is_empty());
        assert!(style.image_block().is_empty());
    }

    #[test]
    fn blocks_pick_capability_specific_styles() {
        let style = StyleModifiers::default()
            .with_global_modifier("dreamlike")
            .with_visual_style("wide lenses");

        let visual = style.visual_block();
        assert!(visual.contains("Global Style: dreamlike"));
        assert!(visual.contains("Visual Style: wide lenses"));

        // Story block ignores the visual style.
        let story = style.story_block();
        assert!(story.contains("Global Style: dreamlike"));
        assert!(!story.contains("wide lenses"));
    }
}
