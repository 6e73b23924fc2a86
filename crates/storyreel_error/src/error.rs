//! Top-level error wrapper types.

use crate::{
    BadInputError, BuilderError, ConfigError, JsonError, NotImplementedError, UpstreamError,
};

/// This is the foundation error enum for the Storyreel workspace.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, BadInputError};
///
/// let input_err = BadInputError::new("Story content is required");
/// let err: StoryreelError = input_err.into();
/// assert!(format!("{}", err).contains("Bad Input"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// Missing credentials or required configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Missing or invalid required input field
    #[from(BadInputError)]
    BadInput(BadInputError),
    /// Remote generation call failed or returned an invalid payload
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Capability not yet implemented
    #[from(NotImplementedError)]
    NotImplemented(NotImplementedError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ConfigError};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyreel operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, UpstreamError, UpstreamErrorKind};
///
/// fn fetch_story() -> StoryreelResult<String> {
///     Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse))?
/// }
/// ```
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
