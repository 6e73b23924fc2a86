//! Handler for the image generation command.

use super::commands::AspectRatioArg;
use storyreel_core::ImageRequest;
use storyreel_error::StoryreelResult;
use storyreel_interface::ImageGeneration;
use storyreel_models::{ReelConfig, VertexImagenClient};
use tracing::info;

/// Generate still images via Vertex AI Imagen and print them as data URIs.
pub async fn generate_image(
    prompt: &str,
    aspect_ratio: Option<AspectRatioArg>,
    negative_prompt: Option<String>,
    count: u32,
) -> StoryreelResult<()> {
    let config = ReelConfig::load()?;
    let client = VertexImagenClient::new(config.vertex)?;

    let mut request = ImageRequest::builder();
    request.prompt(prompt).number_of_images(count);
    if let Some(ratio) = aspect_ratio {
        request.aspect_ratio(ratio);
    }
    if let Some(negative) = negative_prompt {
        request.negative_prompt(negative);
    }
    let request = request
        .build()
        .map_err(|e| storyreel_error::BuilderError::from(e.to_string()))?;

    let images = client.generate_image(&request).await?;
    info!(count = images.len(), "Images generated");

    for image in images {
        println!("data:{};base64,{}", image.mime_type, image.data_base64);
    }
    Ok(())
}
