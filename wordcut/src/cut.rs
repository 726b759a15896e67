//! Shared cut run - load transcript, extract cut points, build and write segments.

use crate::cli::Format;
use crate::config::CommonConfig;
use crate::output;
use color_eyre::Section;
use eyre::{Result, WrapErr};
use std::path::Path;
use wordcut_core::error::CutPointError;
use wordcut_core::extract::{CutConfig, Policy};
use wordcut_core::plan::SegmentPlan;
use wordcut_core::transcript::load_transcript;
use wordcut_core::types::WordRecord;

pub fn execute(config: CommonConfig, cut: CutConfig) -> Result<()> {
    tracing::info!(
        input = ?config.transcript.display(),
        output = ?config.output.display(),
        "planning segments"
    );

    let words = load_transcript(&config.transcript)
        .wrap_err_with(|| format!("failed to load transcript: {:?}", config.transcript.display()))?;

    tracing::info!(words = words.len(), "transcript loaded");

    let plan = plan_segments(&words, &config, &cut)?;

    log_plan(&plan, &config);

    let content = match config.format {
        Format::Json => output::to_json(&plan.segments)?,
        Format::Srt => output::display_subtitles(&output::to_subtitles(&plan.segments, &words)),
    };

    tracing::info!(path = ?config.output.display(), "write segments");

    write_output(&config.output, &content)?;

    if config.preview {
        let preview = match config.format {
            Format::Json => output::preview_segments(&plan.segments, 3, 3),
            Format::Srt => output::preview_subtitles(
                &output::to_subtitles(&plan.segments, &words),
                3,
                3,
            ),
        };
        println!("{preview}");
    }

    Ok(())
}

/// Run extraction and segment building over a loaded transcript.
pub fn plan_segments(
    words: &[WordRecord],
    config: &CommonConfig,
    cut: &CutConfig,
) -> Result<SegmentPlan> {
    let extraction = cut.extract(words);

    config
        .builder
        .build(&extraction.cut_points)
        .map_err(|e| with_hint(e, &cut.policy))
}

/// Attach a hint about the likely upstream cause of malformed cut points.
fn with_hint(err: CutPointError, policy: &Policy) -> eyre::Report {
    let hint = match (&err, policy) {
        (CutPointError::Unbalanced { .. }, Policy::ControlWords(tokens)) => Some(format!(
            "every {:?} needs a matching {:?}; check the transcript for a missed or misheard token",
            tokens.start_token, tokens.end_token
        )),
        (CutPointError::InvertedSpan { .. }, Policy::ControlWords(tokens)) => Some(format!(
            "{:?} was recognized before its {:?}",
            tokens.end_token, tokens.start_token
        )),
        _ => None,
    };

    let report = eyre::Report::new(err).wrap_err("failed to build segments");

    match hint {
        Some(hint) => report.suggestion(hint),
        None => report,
    }
}

fn log_plan(plan: &SegmentPlan, config: &CommonConfig) {
    let duration = config.builder.duration;

    tracing::info!(
        segments = plan.segments.len(),
        dropped = plan.dropped,
        discarded = plan.discarded(duration).len(),
        "segments planned"
    );

    if let Some(kept) = plan.kept_duration(duration) {
        tracing::info!(kept = %format!("{kept:.2}s"), "kept duration");
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create output directory: {:?}", parent.display()))?;
    }

    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write segments: {:?}", path.display()))
}
