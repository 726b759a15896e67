//! Cut point extraction from a word stream.
//!
//! Two policies are supported:
//!
//! - [`Policy::ControlWords`]: a spoken start token opens a discarded span and a
//!   spoken end token closes it.
//! - [`Policy::Silence`]: every gap between consecutive words longer than the
//!   threshold is discarded.
//!
//! Both produce [`CutPoints`] with the same meaning, so the result feeds
//! straight into [`crate::plan::SegmentBuilder`].

use crate::error::ConfigError;
use crate::types::{CutPoints, WordRecord};

/// Default margin kept around every cut, in seconds.
pub const DEFAULT_OFFSET: f64 = 0.1;

/// Default minimum silence gap, in seconds.
pub const DEFAULT_SILENCE_THRESHOLD: f64 = 1.0;

pub const DEFAULT_START_TOKEN: &str = "start";
pub const DEFAULT_END_TOKEN: &str = "end";

/// Control token pair and the comparison used to recognize them.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMatch {
    pub start_token: String,
    pub end_token: String,
    pub case_sensitive: bool,
}

impl Default for TokenMatch {
    fn default() -> Self {
        Self::new(DEFAULT_START_TOKEN, DEFAULT_END_TOKEN)
    }
}

impl TokenMatch {
    pub fn new(start_token: impl Into<String>, end_token: impl Into<String>) -> Self {
        Self {
            start_token: start_token.into(),
            end_token: end_token.into(),
            case_sensitive: false,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Normalize recognizer output for comparison.
    ///
    /// Recognizers emit words like `" Start."`, so surrounding whitespace and
    /// ASCII punctuation are stripped before comparing.
    pub fn normalize(&self, text: &str) -> String {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());

        if self.case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let start = self.normalize(&self.start_token);
        let end = self.normalize(&self.end_token);

        if start.is_empty() {
            return Err(ConfigError::EmptyToken(self.start_token.clone()));
        }
        if end.is_empty() {
            return Err(ConfigError::EmptyToken(self.end_token.clone()));
        }
        if start == end {
            return Err(ConfigError::AmbiguousTokens {
                start: self.start_token.clone(),
                end: self.end_token.clone(),
            });
        }

        Ok(())
    }
}

/// Active extraction policy.
#[derive(Clone, Debug, PartialEq)]
pub enum Policy {
    /// Cut between spoken control tokens
    ControlWords(TokenMatch),
    /// Cut gaps between words longer than `threshold` seconds
    Silence { threshold: f64 },
}

/// Extraction configuration, built once per run.
#[derive(Clone, Debug, PartialEq)]
pub struct CutConfig {
    /// Margin in seconds kept around every cut
    pub offset: f64,
    pub policy: Policy,
}

impl CutConfig {
    /// Create a validated configuration.
    pub fn new(offset: f64, policy: Policy) -> Result<Self, ConfigError> {
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::InvalidOffset(offset));
        }

        match &policy {
            Policy::ControlWords(tokens) => tokens.validate()?,
            Policy::Silence { threshold } if !threshold.is_finite() || *threshold < 0.0 => {
                return Err(ConfigError::InvalidThreshold(*threshold));
            }
            Policy::Silence { .. } => {}
        }

        Ok(Self { offset, policy })
    }

    pub fn control_words(offset: f64, tokens: TokenMatch) -> Result<Self, ConfigError> {
        Self::new(offset, Policy::ControlWords(tokens))
    }

    pub fn silence(offset: f64, threshold: f64) -> Result<Self, ConfigError> {
        Self::new(offset, Policy::Silence { threshold })
    }

    /// Run the configured policy over a word stream.
    pub fn extract(&self, words: &[WordRecord]) -> Extraction {
        let extraction = match &self.policy {
            Policy::ControlWords(tokens) => extract_control_words(words, tokens, self.offset),
            Policy::Silence { threshold } => {
                let extraction = extract_silence(words, *threshold, self.offset);
                if extraction.skipped > 0 {
                    tracing::warn!(
                        skipped = extraction.skipped,
                        offset = self.offset,
                        "silence gaps narrower than twice the offset were kept"
                    );
                }
                extraction
            }
        };

        tracing::debug!(
            words = words.len(),
            starts = extraction.cut_points.starts.len(),
            ends = extraction.cut_points.ends.len(),
            skipped = extraction.skipped,
            "extracted cut points"
        );

        extraction
    }
}

/// Extraction result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub cut_points: CutPoints,
    /// Silence gaps dropped because the offset closed them
    pub skipped: usize,
}

/// Collect cut points around spoken control tokens.
///
/// A start token cuts from `offset` before the token, an end token resumes
/// `offset` after it. Tokens spoken as ordinary speech produce cuts too.
pub fn extract_control_words(words: &[WordRecord], tokens: &TokenMatch, offset: f64) -> Extraction {
    let start_token = tokens.normalize(&tokens.start_token);
    let end_token = tokens.normalize(&tokens.end_token);

    let cut_points = words
        .iter()
        .fold(CutPoints::default(), |mut acc, word| {
            let text = tokens.normalize(&word.text);
            if text == start_token {
                acc.starts.push(word.start - offset);
            } else if text == end_token {
                acc.ends.push(word.end + offset);
            }
            acc
        });

    Extraction {
        cut_points,
        skipped: 0,
    }
}

/// Collect cut points around silence gaps longer than `threshold`.
///
/// The discarded span runs from `offset` after the last word before the gap to
/// `offset` before the first word after it. Gaps the offset would close or
/// invert are skipped and counted.
pub fn extract_silence(words: &[WordRecord], threshold: f64, offset: f64) -> Extraction {
    words
        .windows(2)
        .fold(Extraction::default(), |mut acc, pair| {
            let [current, next] = pair else {
                return acc;
            };

            if next.start - current.end <= threshold {
                return acc;
            }

            let cut_start = current.end + offset;
            let cut_end = next.start - offset;

            if cut_start >= cut_end {
                acc.skipped += 1;
            } else {
                acc.cut_points.starts.push(cut_start);
                acc.cut_points.ends.push(cut_end);
            }

            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[(&str, f64, f64)]) -> Vec<WordRecord> {
        items
            .iter()
            .map(|&(text, start, end)| WordRecord::new(text, start, end))
            .collect()
    }

    #[test]
    fn control_words_apply_offset_outward() {
        let words = words(&[
            ("hello", 0.0, 0.5),
            ("start", 1.0, 1.4),
            ("oops", 1.5, 2.0),
            ("end", 2.5, 2.8),
            ("world", 3.0, 3.5),
        ]);
        let tokens = TokenMatch::default();

        let extraction = extract_control_words(&words, &tokens, 0.1);

        match (&extraction.cut_points.starts[..], &extraction.cut_points.ends[..]) {
            ([start], [end]) => {
                assert!((start - 0.9).abs() < 1e-9);
                assert!((end - 2.9).abs() < 1e-9);
            }
            _ => panic!("expected one cut, got {:?}", extraction.cut_points),
        }
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn control_words_normalize_recognizer_text() {
        let words = words(&[(" Start.", 1.0, 1.4), (" END,", 2.0, 2.2)]);
        let tokens = TokenMatch::default();

        let extraction = extract_control_words(&words, &tokens, 0.0);

        assert_eq!(extraction.cut_points, CutPoints::new(vec![1.0], vec![2.2]));
    }

    #[test]
    fn case_sensitive_tokens_ignore_other_casing() {
        let words = words(&[("Start", 1.0, 1.4), ("end", 2.0, 2.2)]);
        let tokens = TokenMatch::new("start", "end").case_sensitive(true);

        let extraction = extract_control_words(&words, &tokens, 0.0);

        assert!(extraction.cut_points.starts.is_empty());
        assert_eq!(extraction.cut_points.ends, vec![2.2]);
    }

    #[test]
    fn repeated_start_token_yields_repeated_cut() {
        let words = words(&[
            ("start", 1.0, 1.2),
            ("start", 2.0, 2.2),
            ("end", 3.0, 3.2),
            ("end", 4.0, 4.2),
        ]);

        let extraction = extract_control_words(&words, &TokenMatch::default(), 0.0);

        assert_eq!(extraction.cut_points.starts, vec![1.0, 2.0]);
        assert_eq!(extraction.cut_points.ends, vec![3.2, 4.2]);
    }

    #[test]
    fn silence_cuts_only_long_gaps() {
        let words = words(&[
            ("one", 0.0, 0.5),
            ("two", 0.8, 1.0),
            ("three", 3.0, 3.5),
            ("four", 3.6, 4.0),
            ("five", 6.0, 6.5),
        ]);

        let extraction = extract_silence(&words, 1.0, 0.25);

        assert_eq!(
            extraction.cut_points,
            CutPoints::new(vec![1.25, 4.25], vec![2.75, 5.75])
        );
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn silence_gap_equal_to_threshold_is_kept() {
        let words = words(&[("one", 0.0, 1.0), ("two", 2.0, 3.0)]);

        let extraction = extract_silence(&words, 1.0, 0.0);

        assert!(extraction.cut_points.is_empty());
    }

    #[test]
    fn silence_offset_inversion_is_skipped() {
        // gap of 1.5s, offset 1.0 on both sides would invert it
        let words = words(&[("one", 0.0, 1.0), ("two", 2.5, 3.0), ("three", 6.0, 6.5)]);

        let extraction = extract_silence(&words, 1.0, 1.0);

        assert_eq!(extraction.cut_points, CutPoints::new(vec![4.0], vec![5.0]));
        assert_eq!(extraction.skipped, 1);
    }

    #[test]
    fn silence_on_short_streams_is_empty() {
        assert_eq!(extract_silence(&[], 1.0, 0.0), Extraction::default());
        assert_eq!(
            extract_silence(&words(&[("solo", 0.0, 1.0)]), 1.0, 0.0),
            Extraction::default()
        );
    }

    #[test]
    fn config_rejects_invalid_values() {
        assert_eq!(
            CutConfig::silence(-0.1, 1.0),
            Err(ConfigError::InvalidOffset(-0.1))
        );
        assert_eq!(
            CutConfig::silence(0.1, f64::INFINITY),
            Err(ConfigError::InvalidThreshold(f64::INFINITY))
        );
        assert!(matches!(
            CutConfig::control_words(0.1, TokenMatch::new("...", "end")),
            Err(ConfigError::EmptyToken(_))
        ));
        assert!(matches!(
            CutConfig::control_words(0.1, TokenMatch::new("Cut", "cut!")),
            Err(ConfigError::AmbiguousTokens { .. })
        ));
    }

    #[test]
    fn config_dispatches_to_policy() {
        let words = words(&[("a", 0.0, 1.0), ("b", 5.0, 6.0)]);
        let config = CutConfig::silence(0.0, 2.0).expect("valid config");

        let extraction = config.extract(&words);

        assert_eq!(extraction.cut_points, CutPoints::new(vec![1.0], vec![5.0]));
    }
}
