//! Trait definitions for Storyreel generation backends.
//!
//! This crate provides the core driver trait and the capability traits
//! that backends implement. The pipeline layer is written against these
//! seams, so backends (hosted APIs, placeholders, test mocks) are
//! interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{GenerationDriver, ImageGeneration, VideoGeneration};
