//! Configuration loading for generation backends.
//!
//! Configuration is merged from two optional TOML sources plus environment
//! variables, with later sources taking precedence:
//! 1. `~/.config/storyreel/storyreel.toml`
//! 2. `./storyreel.toml`
//! 3. `GEMINI_API_KEY`, `GEMINI_MODEL`, `VERTEX_PROJECT_ID`,
//!    `VERTEX_LOCATION`, `VERTEX_ACCESS_TOKEN`

use config::{Config, File};
use serde::{Deserialize, Serialize};
use storyreel_error::{ConfigError, StoryreelResult};
use tracing::debug;

/// Gemini API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct GeminiSettings {
    /// API key for the Generative Language API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default model for storyboard generation (story generation always
    /// uses the flash model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Vertex AI settings for the image capability.
///
/// All three fields are required before an Imagen call is attempted; the
/// client reports a not-implemented placeholder otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct VertexSettings {
    /// Google Cloud project id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Vertex AI location (e.g., "us-central1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// OAuth2 access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl VertexSettings {
    /// Whether all fields required for a real Imagen call are present.
    pub fn is_complete(&self) -> bool {
        self.project_id.is_some() && self.location.is_some() && self.access_token.is_some()
    }
}

/// Top-level Storyreel configuration.
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-1.5-pro-latest"
///
/// [vertex]
/// project_id = "my-project"
/// location = "us-central1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ReelConfig {
    /// Gemini API settings
    #[serde(default)]
    pub gemini: GeminiSettings,

    /// Vertex AI settings
    #[serde(default)]
    pub vertex: VertexSettings,
}

impl ReelConfig {
    /// Load configuration with precedence: env vars > current dir > home dir.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a config file exists but cannot be
    /// parsed. A missing file is not an error; the result may be empty.
    pub fn load() -> StoryreelResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir");

        let mut builder = Config::builder();

        // User config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyreel/storyreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // User config from current directory (optional, higher precedence)
        builder = builder.add_source(File::with_name("storyreel").required(false));

        let mut config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to an already-loaded config.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup, winning over file values.
    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, var: F) {
        if let Some(key) = var("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(model) = var("GEMINI_MODEL") {
            self.gemini.model = Some(model);
        }
        if let Some(project) = var("VERTEX_PROJECT_ID") {
            self.vertex.project_id = Some(project);
        }
        if let Some(location) = var("VERTEX_LOCATION") {
            self.vertex.location = Some(location);
        }
        if let Some(token) = var("VERTEX_ACCESS_TOKEN") {
            self.vertex.access_token = Some(token);
        }
    }

    /// The Gemini API key, or a `ConfigError` when absent.
    pub fn gemini_api_key(&self) -> StoryreelResult<&str> {
        self.gemini
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ConfigError::new(
                    "Gemini API key is required (set GEMINI_API_KEY or [gemini] api_key)",
                )
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_config_error() {
        let config = ReelConfig::default();
        assert!(config.gemini_api_key().is_err());
    }

    #[test]
    fn empty_api_key_is_config_error() {
        let config = ReelConfig {
            gemini: GeminiSettings {
                api_key: Some(String::new()),
                model: None,
            },
            ..Default::default()
        };
        assert!(config.gemini_api_key().is_err());
    }

    #[test]
    fn overrides_win_over_file_provided_values() {
        let mut config = ReelConfig {
            gemini: GeminiSettings {
                api_key: Some("file-key".to_string()),
                model: Some("file-model".to_string()),
            },
            vertex: VertexSettings {
                project_id: Some("file-project".to_string()),
                ..Default::default()
            },
        };

        config.apply_overrides(|key| match key {
            "GEMINI_API_KEY" => Some("env-key".to_string()),
            "VERTEX_PROJECT_ID" => Some("env-project".to_string()),
            _ => None,
        });

        assert_eq!(config.gemini.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.vertex.project_id.as_deref(), Some("env-project"));
        // Fields without an override keep the file-provided value.
        assert_eq!(config.gemini.model.as_deref(), Some("file-model"));
    }

    #[test]
    fn overrides_fill_fields_absent_from_files() {
        let mut config = ReelConfig::default();
        config.apply_overrides(|key| {
            (key == "GEMINI_API_KEY").then(|| "env-key".to_string())
        });

        assert_eq!(config.gemini.api_key.as_deref(), Some("env-key"));
        assert!(config.gemini.model.is_none());
    }

    #[test]
    fn vertex_completeness_requires_all_fields() {
        let mut vertex = VertexSettings {
            project_id: Some("proj".to_string()),
            location: Some("us-central1".to_string()),
            access_token: None,
        };
        assert!(!vertex.is_complete());

        vertex.access_token = Some("token".to_string());
        assert!(vertex.is_complete());
    }
}
