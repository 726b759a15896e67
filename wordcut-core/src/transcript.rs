//! Transcript loading from speech recognizer JSON output.
//!
//! Supported layouts:
//!
//! - flat array of words: `[{"text": "hi", "start": 0.0, "end": 0.4}]`
//! - Vosk result, or one result per utterance: `{"result": [{"word": "hi", "conf": 0.9, ...}]}`
//! - Whisper word timestamps: `{"segments": [{"words": [{"word": " hi", "probability": 0.9, ...}]}]}`
//!
//! Every layout is validated into time-ordered [`WordRecord`]s.

use crate::error::{Result, TranscriptError};
use crate::types::WordRecord;
use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;
use std::path::Path;

/// Word object as emitted by recognizers.
#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(alias = "word")]
    text: String,
    start: f64,
    end: f64,
    #[serde(default = "full_confidence", alias = "conf", alias = "probability")]
    confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct VoskResult {
    result: Vec<RawWord>,
}

/// Silent utterances carry only an empty `text`.
#[derive(Debug, Deserialize)]
struct VoskUtterance {
    #[serde(default)]
    result: Vec<RawWord>,
    #[allow(dead_code)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    #[serde(default)]
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
struct WhisperTranscript {
    segments: Vec<WhisperSegment>,
}

/// Recognizer output layout, chosen from the top-level JSON shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Words,
    Vosk,
    VoskUtterances,
    Whisper,
}

impl Layout {
    /// Pick the layout from the JSON shape alone.
    ///
    /// An array is a list of Vosk utterances when none of its elements carries
    /// a `start` time, and a word list otherwise.
    fn detect(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) if map.contains_key("segments") => Some(Layout::Whisper),
            Value::Object(map) if map.contains_key("result") => Some(Layout::Vosk),
            Value::Array(items)
                if !items.is_empty() && items.iter().all(|item| item.get("start").is_none()) =>
            {
                Some(Layout::VoskUtterances)
            }
            Value::Array(_) => Some(Layout::Words),
            _ => None,
        }
    }

    /// Deserialize every word of this layout, failing on the first bad record.
    fn words(self, value: Value) -> serde_json::Result<Vec<RawWord>> {
        let words = match self {
            Layout::Words => serde_json::from_value(value)?,
            Layout::Vosk => serde_json::from_value::<VoskResult>(value)?.result,
            Layout::VoskUtterances => serde_json::from_value::<Vec<VoskUtterance>>(value)?
                .into_iter()
                .flat_map(|u| u.result)
                .collect(),
            Layout::Whisper => serde_json::from_value::<WhisperTranscript>(value)?
                .segments
                .into_iter()
                .flat_map(|s| s.words)
                .collect(),
        };

        Ok(words)
    }
}

impl From<RawWord> for WordRecord {
    fn from(raw: RawWord) -> Self {
        WordRecord::new(raw.text, raw.start, raw.end).with_confidence(raw.confidence)
    }
}

/// Parse and validate a transcript from JSON text.
///
/// # Errors
///
/// Returns error if the JSON matches no supported layout or the words are
/// not valid and time-ordered.
pub fn parse_transcript(json: &str) -> Result<Vec<WordRecord>> {
    let value: Value = serde_json::from_str(json)?;

    let layout = Layout::detect(&value).ok_or_else(|| {
        serde_json::Error::custom(
            "unrecognized transcript layout: expected a word list, a Vosk result, or Whisper segments",
        )
    })?;
    tracing::debug!(?layout, "transcript layout");

    let words: Vec<WordRecord> = layout
        .words(value)?
        .into_iter()
        .map(Into::into)
        .collect();

    validate_words(&words)?;

    Ok(words)
}

/// Load and validate a transcript from a JSON file.
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>> {
    let json = std::fs::read_to_string(path)?;
    parse_transcript(&json)
}

/// Check the word stream contract: finite times, `start <= end`, and
/// non-decreasing `start`.
///
/// Out-of-order words are rejected rather than sorted.
pub fn validate_words(words: &[WordRecord]) -> std::result::Result<(), TranscriptError> {
    let mut previous: Option<f64> = None;

    for (index, word) in words.iter().enumerate() {
        if !word.start.is_finite() || !word.end.is_finite() {
            return Err(TranscriptError::NonFinite { index });
        }

        if word.end < word.start {
            return Err(TranscriptError::InvertedWord {
                index,
                start: word.start,
                end: word.end,
            });
        }

        if let Some(previous) = previous
            && word.start < previous
        {
            return Err(TranscriptError::NonMonotonicInput {
                index,
                start: word.start,
                previous,
            });
        }

        previous = Some(word.start);
    }

    Ok(())
}
