//! JSON serialization error types.

/// JSON serialization error with source location.
///
/// Raised when local data (a storyboard, batch results) fails to render
/// as JSON output. Unparseable JSON coming back from a generation API is
/// not a `JsonError`; that is an upstream failure and carries the
/// response context instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::JsonError;
    ///
    /// let err = JsonError::new("Failed to serialize storyboard");
    /// assert!(err.message.contains("storyboard"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
