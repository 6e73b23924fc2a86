//! Error types for the Storyreel generation pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Storyreel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{StoryreelResult, ConfigError};
//!
//! fn load_credentials() -> StoryreelResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY not set"))?
//! }
//!
//! match load_credentials() {
//!     Ok(key) => println!("Got key of length {}", key.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bad_input;
mod builder;
mod config;
mod error;
mod json;
mod not_implemented;
mod upstream;

pub use bad_input::BadInputError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use json::JsonError;
pub use not_implemented::NotImplementedError;
pub use upstream::{UpstreamError, UpstreamErrorKind};
