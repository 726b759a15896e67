//! Configuration types for resolved CLI arguments.
//!
//! This module contains Config structs and their TryFrom implementations.
//! Args structs (for CLI parsing) remain in cli.rs and the subcommand modules.

use crate::cli::{CommonArgs, Format};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use wordcut_core::plan::SegmentBuilder;

/// Resolved configuration shared by every cut policy.
///
/// Converted from CommonArgs via TryFrom. The media duration is resolved
/// into the segment builder, reading the WAV header if needed.
#[derive(Debug)]
pub struct CommonConfig {
    pub transcript: PathBuf,
    pub output: PathBuf,
    pub format: Format,
    pub builder: SegmentBuilder,
    pub preview: bool,
}

impl TryFrom<CommonArgs> for CommonConfig {
    type Error = eyre::Error;

    fn try_from(args: CommonArgs) -> Result<Self> {
        let duration = match (args.duration, args.media.as_deref()) {
            (Some(secs), _) => Some(secs),
            (None, Some(path)) => Some(crate::media::wav_duration(path)?),
            (None, None) => None,
        };

        let builder = match duration {
            Some(secs) => SegmentBuilder::with_duration(secs).wrap_err("invalid media duration")?,
            None => SegmentBuilder::UNBOUNDED,
        };

        let output = args
            .output
            .unwrap_or_else(|| args.transcript.with_extension(args.format.extension()));

        Ok(Self {
            transcript: args.transcript,
            output,
            format: args.format,
            builder,
            preview: args.preview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn common_args(argv: &[&str]) -> CommonArgs {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Silence(args) => args.common,
            Commands::Tokens(args) => args.common,
        }
    }

    #[test]
    fn default_output_follows_format() {
        let config: CommonConfig = common_args(&["wordcut", "silence", "talks/intro.json"])
            .try_into()
            .unwrap();
        assert_eq!(config.output, PathBuf::from("talks/intro.segments.json"));

        let config: CommonConfig =
            common_args(&["wordcut", "silence", "talks/intro.json", "-f", "srt"])
                .try_into()
                .unwrap();
        assert_eq!(config.output, PathBuf::from("talks/intro.segments.srt"));
    }

    #[test]
    fn explicit_duration_bounds_builder() {
        let config: CommonConfig =
            common_args(&["wordcut", "tokens", "a.json", "--duration", "12.5"])
                .try_into()
                .unwrap();

        assert_eq!(config.builder.duration, Some(12.5));
    }

    #[test]
    fn rejects_non_positive_duration() {
        let result: Result<CommonConfig> =
            common_args(&["wordcut", "tokens", "a.json", "--duration", "0"]).try_into();

        assert!(result.is_err());
    }

    #[test]
    fn missing_media_file_is_error() {
        let result: Result<CommonConfig> = common_args(&[
            "wordcut",
            "tokens",
            "a.json",
            "--media",
            "/nonexistent/audio.wav",
        ])
        .try_into();

        assert!(result.is_err());
    }
}
