//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use std::path::PathBuf;
use wordcut_core::extract::DEFAULT_OFFSET;

#[derive(Debug, Parser)]
#[command(name = "wordcut")]
#[command(about = "Plan keep segments for trimming a recording from its transcript")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cut fragments enclosed by spoken start and end tokens
    Tokens(crate::tokens::Args),

    /// Cut silence between words
    Silence(crate::silence::Args),
}

/// Segment output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON list of `{start, end}` pairs, `end: null` for end of media
    #[default]
    Json,
    /// SRT subtitles, one entry per kept segment with its transcript text
    Srt,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "segments.json",
            Format::Srt => "segments.srt",
        }
    }
}

/// Arguments shared by every cut policy.
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Path to transcript JSON (word list, Vosk, or Whisper output)
    pub transcript: PathBuf,

    /// Output path (default: transcript path with .segments.json or .segments.srt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Margin in seconds kept around every cut
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: f64,

    /// Media duration in seconds
    #[arg(long, conflicts_with = "media")]
    pub duration: Option<f64>,

    /// WAV file to read the media duration from
    #[arg(long, value_name = "WAV")]
    pub media: Option<PathBuf>,

    /// Print a preview of the segments to stdout
    #[arg(long)]
    pub preview: bool,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Tokens(args) => crate::tokens::execute(args.try_into()?),
        Commands::Silence(args) => crate::silence::execute(args.try_into()?),
    }
}
