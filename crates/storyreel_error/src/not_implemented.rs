//! Not implemented error types.

/// Not implemented error with source location.
///
/// Used for the image generation placeholder contract: when Vertex AI
/// configuration is incomplete the client reports what is missing rather
/// than attempting the call.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Implemented: {} at line {} in {}", message, line, file)]
pub struct NotImplementedError {
    /// Description of what is not implemented
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotImplementedError {
    /// Create a new NotImplementedError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::NotImplementedError;
    ///
    /// let err = NotImplementedError::new("Image generation requires Vertex AI credentials");
    /// assert!(err.message.contains("Vertex"));
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
