//! Vertex AI Imagen backend for the image capability.
//!
//! Image generation requires a Google Cloud project, a Vertex location,
//! and an OAuth2 access token. When any of these are absent the client
//! reports a typed not-implemented error rather than attempting a call,
//! so callers can distinguish "not configured" from an upstream failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyreel_core::{AspectRatio, GeneratedImage, ImageRequest, SafetyFilterLevel};
use storyreel_error::{
    BadInputError, ConfigError, NotImplementedError, StoryreelResult, UpstreamError,
    UpstreamErrorKind,
};
use storyreel_interface::ImageGeneration;
use tracing::{info, instrument};

use crate::config::VertexSettings;

const IMAGEN_MODEL: &str = "imagen-3.0-generate-001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictBody {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Instance {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    sample_count: u32,
    aspect_ratio: AspectRatio,
    #[serde(skip_serializing_if = "Option::is_none")]
    safety_filter_level: Option<SafetyFilterLevel>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
    #[serde(default)]
    mime_type: Option<String>,
}

/// Client for the Vertex AI Imagen predict endpoint.
///
/// Construction only stores the settings; completeness is checked per
/// call so a partially configured client still constructs (and reports
/// the missing configuration as a not-implemented capability).
#[derive(Debug, Clone)]
pub struct VertexImagenClient {
    http: reqwest::Client,
    settings: VertexSettings,
}

impl VertexImagenClient {
    /// Create a client from Vertex settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the HTTP client cannot be built.
    pub fn new(settings: VertexSettings) -> StoryreelResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, settings })
    }

    fn endpoint(&self, project_id: &str, location: &str) -> String {
        format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{location}/publishers/google/models/{IMAGEN_MODEL}:predict"
        )
    }
}

#[async_trait]
impl ImageGeneration for VertexImagenClient {
    #[instrument(skip(self, req))]
    async fn generate_image(&self, req: &ImageRequest) -> StoryreelResult<Vec<GeneratedImage>> {
        if req.prompt.trim().is_empty() {
            return Err(BadInputError::new("Image prompt is required").into());
        }
        if !self.settings.is_complete() {
            return Err(NotImplementedError::new(
                "Image generation requires Vertex AI configuration \
                 (project_id, location, access_token)",
            )
            .into());
        }

        // is_complete() guarantees all three fields below.
        let project_id = self.settings.project_id.as_deref().unwrap_or_default();
        let location = self.settings.location.as_deref().unwrap_or_default();
        let token = self.settings.access_token.as_deref().unwrap_or_default();

        let body = PredictBody {
            instances: vec![Instance {
                prompt: req.prompt.clone(),
                negative_prompt: req.negative_prompt.clone(),
            }],
            parameters: Parameters {
                sample_count: req.number_of_images.unwrap_or(1),
                aspect_ratio: req.aspect_ratio.unwrap_or(AspectRatio::Landscape),
                safety_filter_level: req.safety_filter_level,
            },
        };

        let response = self
            .http
            .post(self.endpoint(project_id, location))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error body: {}", e));
            return Err(UpstreamError::api(status.as_u16(), message).into());
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::MalformedResponse(e.to_string())))?;

        if parsed.predictions.is_empty() {
            return Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse).into());
        }

        let images: Vec<GeneratedImage> = parsed
            .predictions
            .into_iter()
            .map(|p| GeneratedImage {
                data_base64: p.bytes_base64_encoded,
                mime_type: p.mime_type.unwrap_or_else(|| "image/png".to_string()),
            })
            .collect();

        info!(count = images.len(), "Images generated");
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn incomplete_settings_report_not_implemented() {
        let client = VertexImagenClient::new(VertexSettings::default()).unwrap();
        let req = ImageRequest::builder().prompt("a fern").build().unwrap();

        let err = client.generate_image(&req).await.unwrap_err();
        assert!(err.to_string().contains("Vertex AI configuration"));
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_config_check() {
        let client = VertexImagenClient::new(VertexSettings::default()).unwrap();
        let req = ImageRequest::builder().prompt("  ").build().unwrap();

        assert!(client.generate_image(&req).await.is_err());
    }

    #[test]
    fn endpoint_embeds_project_and_location() {
        let client = VertexImagenClient::new(VertexSettings::default()).unwrap();
        let url = client.endpoint("my-project", "us-central1");
        assert!(url.starts_with("https://us-central1-aiplatform.googleapis.com/"));
        assert!(url.contains("/projects/my-project/locations/us-central1/"));
        assert!(url.ends_with(":predict"));
    }
}
