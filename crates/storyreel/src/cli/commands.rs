//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyreel_core::{AspectRatio, StyleModifiers};

/// Storyreel - staged story-to-video generation
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Turn an idea into a story, a storyboard, and per-scene video clips", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: idea, story, storyboard, scene videos
    Run {
        /// The story idea
        idea: String,

        /// Genre hint (defaults to "General")
        #[arg(long)]
        genre: Option<String>,

        /// Tone hint (defaults to "Neutral")
        #[arg(long)]
        tone: Option<String>,

        /// How many scenes to render (defaults to min(scene count, 5))
        #[arg(long)]
        scenes: Option<usize>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Generate story prose from an idea
    Story {
        /// The story idea
        idea: String,

        /// Genre hint (defaults to "General")
        #[arg(long)]
        genre: Option<String>,

        /// Tone hint (defaults to "Neutral")
        #[arg(long)]
        tone: Option<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Break an existing story into a storyboard
    Storyboard {
        /// Path to a file containing the story text
        story_file: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Generate a still image via Vertex AI Imagen
    Image {
        /// Image generation prompt
        prompt: String,

        /// Output aspect ratio
        #[arg(long, value_enum)]
        aspect_ratio: Option<AspectRatioArg>,

        /// Things the model should avoid rendering
        #[arg(long)]
        negative_prompt: Option<String>,

        /// How many samples to request
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

/// Style modifier flags shared by the generation commands.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Style note applied to every generation prompt
    #[arg(long)]
    pub global_style: Option<String>,

    /// Style note applied to story prompts
    #[arg(long)]
    pub story_style: Option<String>,

    /// Style note applied to storyboard and video prompts
    #[arg(long)]
    pub visual_style: Option<String>,
}

impl From<StyleArgs> for StyleModifiers {
    fn from(args: StyleArgs) -> Self {
        let mut style = StyleModifiers::default();
        if let Some(global) = args.global_style {
            style = style.with_global_modifier(global);
        }
        if let Some(story) = args.story_style {
            style = style.with_story_style(story);
        }
        if let Some(visual) = args.visual_style {
            style = style.with_visual_style(visual);
        }
        style
    }
}

/// Aspect ratio choices exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum AspectRatioArg {
    /// 1:1 square
    Square,
    /// 9:16 portrait
    Portrait,
    /// 16:9 landscape
    Landscape,
}

impl From<AspectRatioArg> for AspectRatio {
    fn from(arg: AspectRatioArg) -> Self {
        match arg {
            AspectRatioArg::Square => AspectRatio::Square,
            AspectRatioArg::Portrait => AspectRatio::Portrait,
            AspectRatioArg::Landscape => AspectRatio::Landscape,
        }
    }
}
