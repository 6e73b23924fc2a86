//! Upstream generation API error types.

/// Specific upstream error conditions.
///
/// An upstream error is terminal for the call that produced it, but it is
/// never fatal to sibling items in a batch run. There is no automatic
/// retry; retries are user-initiated re-invocations of a stage transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// The remote API returned an error response
    #[display("Upstream API error (HTTP {}): {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the remote API
        message: String,
    },
    /// The request never produced a response (connection, TLS, timeout)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The response body could not be parsed as the expected JSON
    #[display("Malformed upstream response: {}", _0)]
    MalformedResponse(String),
    /// The response parsed but failed schema validation
    #[display("Upstream response failed validation: {}", _0)]
    SchemaValidation(String),
    /// The response contained no usable output
    #[display("Upstream response was empty")]
    EmptyResponse,
}

/// Upstream error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    /// The kind of error that occurred
    pub kind: UpstreamErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new UpstreamError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an API error from a status code and upstream message.
    #[track_caller]
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(UpstreamErrorKind::Api {
            status_code,
            message: message.into(),
        })
    }
}
