//! Image generation types (Vertex AI Imagen boundary).

use serde::{Deserialize, Serialize};

/// Aspect ratio for generated images.
///
/// Serialized in the `w:h` form the Vertex AI predict endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 square
    #[serde(rename = "1:1")]
    Square,
    /// 9:16 portrait
    #[serde(rename = "9:16")]
    Portrait,
    /// 16:9 landscape
    #[serde(rename = "16:9")]
    Landscape,
    /// 4:3
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4
    #[serde(rename = "3:4")]
    StandardPortrait,
}

/// Safety filter strictness for image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyFilterLevel {
    /// Block only the most severe content
    BlockFew,
    /// Balanced filtering (service default)
    BlockSome,
    /// Strictest filtering
    BlockMost,
}

/// One generated image returned by the image capability.
///
/// # Examples
///
/// ```
/// use storyreel_core::GeneratedImage;
///
/// let image = GeneratedImage {
///     data_base64: "iVBORw0KGgo=".to_string(),
///     mime_type: "image/png".to_string(),
/// };
///
/// assert_eq!(image.mime_type, "image/png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes
    pub data_base64: String,
    /// MIME type of the encoded image
    pub mime_type: String,
}
