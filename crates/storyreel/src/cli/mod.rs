//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! storyreel binary.

mod commands;
mod image;
mod run;

pub use commands::{Cli, Commands, StyleArgs};
pub use image::generate_image;
pub use run::{generate_story, generate_storyboard, run_pipeline};
