//! Google Gemini backend for the story and storyboard capabilities.
//!
//! Speaks the Generative Language REST API (`generateContent`) directly
//! over `reqwest`. Each call is one request/response round trip; responses
//! are schema-validated at this boundary so malformed payloads surface as
//! typed `UpstreamError`s instead of flowing downstream.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyreel_core::{Storyboard, StoryboardRequest, StoryRequest};
use storyreel_error::{
    BadInputError, ConfigError, StoryreelResult, UpstreamError, UpstreamErrorKind,
};
use storyreel_interface::GenerationDriver;
use tracing::{info, instrument};

use crate::extraction::extract_json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model for story generation.
pub const DEFAULT_STORY_MODEL: &str = "gemini-1.5-flash-latest";
/// Default model for storyboard generation (better reasoning and JSON structuring).
pub const DEFAULT_STORYBOARD_MODEL: &str = "gemini-1.5-pro-latest";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// Shared generation parameters for both text capabilities.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

impl GenerationConfig {
    fn text() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            response_mime_type: None,
        }
    }

    fn json() -> Self {
        Self {
            response_mime_type: Some("application/json"),
            ..Self::text()
        }
    }
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

fn safety_settings() -> Vec<SafetySetting> {
    const CATEGORIES: [&str; 4] = [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];
    CATEGORIES
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Google Gemini REST API.
///
/// Credentials are caller-supplied and read-only; the client performs no
/// retries (retries are user-initiated re-invocations of a pipeline stage).
///
/// # Example
///
/// ```no_run
/// use storyreel_core::StoryRequest;
/// use storyreel_interface::GenerationDriver;
/// use storyreel_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new("api-key")?;
/// let request = StoryRequest::builder()
///     .prompt("A robot finds a garden")
///     .build()?;
/// let story = client.generate_story(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model_name: String,
}

impl GeminiClient {
    /// Create a new client with the given API key and default models.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the key is empty.
    pub fn new(api_key: impl Into<String>) -> StoryreelResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::new("Gemini API key is required").into());
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            model_name: DEFAULT_STORY_MODEL.to_string(),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> StoryreelResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY environment variable not set"))?;
        Self::new(api_key)
    }

    /// Override the default story model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// One `generateContent` round trip against the named model.
    async fn generate_content(
        &self,
        model: &str,
        prompt: String,
        config: GenerationConfig,
    ) -> StoryreelResult<String> {
        let body = GenerateContentBody {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: config,
            safety_settings: safety_settings(),
        };

        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .map_err(|e| UpstreamError::new(UpstreamErrorKind::Transport(e.to_string())))?;
            // The API wraps errors in an envelope; fall back to the raw body.
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body_text)
                .map(|env| env.error.message)
                .unwrap_or(body_text);
            return Err(UpstreamError::api(status.as_u16(), message).into());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::new(UpstreamErrorKind::MalformedResponse(e.to_string())))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse).into());
        }

        Ok(text)
    }

    /// Parse and validate a storyboard payload at the client boundary.
    fn parse_storyboard(&self, text: &str) -> StoryreelResult<Storyboard> {
        let json = extract_json(text)?;
        let storyboard: Storyboard = serde_json::from_str(&json).map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::MalformedResponse(format!(
                "Failed to parse storyboard JSON: {}",
                e
            )))
        })?;

        if storyboard.is_empty() {
            return Err(UpstreamError::new(UpstreamErrorKind::SchemaValidation(
                "Storyboard contains no scenes".to_string(),
            ))
            .into());
        }
        if let Some(id) = storyboard.first_duplicate_id() {
            return Err(UpstreamError::new(UpstreamErrorKind::SchemaValidation(format!(
                "Duplicate scene id {} in storyboard",
                id
            )))
            .into());
        }

        Ok(storyboard)
    }
}

fn story_prompt(req: &StoryRequest) -> String {
    let genre = req.genre.as_deref().unwrap_or("General");
    let tone = req.tone.as_deref().unwrap_or("Neutral");
    let style = req.style.story_block();

    format!(
        "You are an expert storyteller and screenwriter.\n\
         Your task is to write a compelling short story based on the user's idea.\n\
         \n\
         Genre: {genre}\n\
         Tone: {tone}{style}\n\
         \n\
         Structure the story clearly. It should be suitable for adaptation into a \
         short video (approx 30-60 seconds).\n\
         Focus on visual descriptions and strong narrative flow.\n\
         \n\
         User Idea: {prompt}",
        prompt = req.prompt
    )
}

fn storyboard_prompt(req: &StoryboardRequest) -> String {
    let style = req.style.visual_block();

    format!(
        "You are an expert storyboard artist and director.\n\
         Your task is to break down the provided story into a sequence of cinematic scenes.{style}\n\
         \n\
         For each scene, provide:\n\
         1. id: scene number\n\
         2. description: what happens in the scene (narrative)\n\
         3. visual_prompt: a highly detailed image generation prompt optimizing for \
         cinematic lighting, composition, and style.\n\
         \n\
         Return a JSON object with this structure:\n\
         {{\n\
           \"scenes\": [\n\
             {{ \"id\": 1, \"description\": \"...\", \"visual_prompt\": \"...\" }}\n\
           ]\n\
         }}\n\
         \n\
         Story:\n{story}",
        story = req.story
    )
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model_name))]
    async fn generate_story(&self, req: &StoryRequest) -> StoryreelResult<String> {
        if req.prompt.trim().is_empty() {
            return Err(BadInputError::new("Prompt is required").into());
        }

        let story = self
            .generate_content(&self.model_name, story_prompt(req), GenerationConfig::text())
            .await?;

        info!(story_length = story.len(), "Story generated");
        Ok(story)
    }

    #[instrument(skip(self, req))]
    async fn generate_storyboard(&self, req: &StoryboardRequest) -> StoryreelResult<Storyboard> {
        if req.story.trim().is_empty() {
            return Err(BadInputError::new("Story content is required").into());
        }

        let model = req.model.as_deref().unwrap_or(DEFAULT_STORYBOARD_MODEL);
        let text = self
            .generate_content(model, storyboard_prompt(req), GenerationConfig::json())
            .await?;

        let storyboard = self.parse_storyboard(&text)?;
        info!(scenes = storyboard.len(), "Storyboard generated");
        Ok(storyboard)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
