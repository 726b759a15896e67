//! Core types for wordcut-core

use serde::Serialize;

/// Recognized word with timestamps.
///
/// Produced by a speech recognizer (or by hand) and read-only to the cut pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct WordRecord {
    /// Recognized text, as emitted by the recognizer
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Recognizer confidence in `[0, 1]`
    pub confidence: f64,
}

impl WordRecord {
    /// Create a word with full confidence.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Raw cut times emitted by an extraction policy.
///
/// `starts[i]` is where the i-th discarded span begins, `ends[i]` is where it
/// ends and kept content resumes. Both lists are in encounter order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CutPoints {
    pub starts: Vec<f64>,
    pub ends: Vec<f64>,
}

impl CutPoints {
    pub fn new(starts: Vec<f64>, ends: Vec<f64>) -> Self {
        Self { starts, ends }
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty() && self.ends.is_empty()
    }
}

/// Kept span of the source media.
///
/// `end == None` extends to the end of the media and is only valid for the
/// last segment of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, `None` for end of media
    pub end: Option<f64>,
}

impl Segment {
    pub fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn open(start: f64) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End time, resolving an open end against the media duration.
    pub fn end_or(&self, duration: Option<f64>) -> Option<f64> {
        self.end.or(duration)
    }

    /// Length in seconds, `None` when open and the media duration is unknown.
    pub fn duration(&self, media_duration: Option<f64>) -> Option<f64> {
        self.end_or(media_duration).map(|end| end - self.start)
    }

    /// Whether `time` falls inside the half-open span `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && self.end.is_none_or(|end| time < end)
    }
}
