//! Bad input error types.

/// Bad input error with source location.
///
/// Raised when a required field is missing or invalid before any remote
/// call is attempted (empty prompt, empty scene description, out-of-range
/// batch selection). Terminal for the call.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Bad Input: {} at line {} in {}", message, line, file)]
pub struct BadInputError {
    /// Description of the invalid or missing input
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BadInputError {
    /// Create a new BadInputError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::BadInputError;
    ///
    /// let err = BadInputError::new("Prompt is required");
    /// assert!(err.message.contains("required"));
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
