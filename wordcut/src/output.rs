//! Segment output for renderers and for review.
//!
//! JSON is the renderer contract; SRT puts the transcript text of every kept
//! segment on screen so a cut list can be checked against the recording.

use eyre::{Result, WrapErr};
use srtlib::{Subtitle, Timestamp};
use wordcut_core::types::{Segment, WordRecord};

/// Serialize segments as a JSON list, `end: null` for end of media.
pub fn to_json(segments: &[Segment]) -> Result<String> {
    serde_json::to_string_pretty(segments).wrap_err("failed to serialize segments")
}

/// Convert kept segments to SRT subtitles carrying the words they keep.
///
/// An open segment ends at the last word it contains.
pub fn to_subtitles(segments: &[Segment], words: &[WordRecord]) -> Vec<Subtitle> {
    segments
        .iter()
        .zip(1..)
        .map(|(s, i)| create_subtitle(s, words, i))
        .collect()
}

/// Create a subtitle from a segment and the words starting inside it.
fn create_subtitle(segment: &Segment, words: &[WordRecord], index: usize) -> Subtitle {
    let inside: Vec<&WordRecord> = words.iter().filter(|w| segment.contains(w.start)).collect();

    let end = segment.end.unwrap_or_else(|| {
        inside
            .last()
            .map_or(segment.start, |w| w.end.max(segment.start))
    });

    let text = inside
        .iter()
        .map(|w| w.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Subtitle::new(
        index,
        secs_to_timestamp(segment.start),
        secs_to_timestamp(end),
        if text.is_empty() {
            "[no speech]".to_string()
        } else {
            text
        },
    )
}

/// Convert seconds to SRT Timestamp, saturating at the largest millisecond count.
fn secs_to_timestamp(secs: f64) -> Timestamp {
    let millis = (secs * 1000.0).round().clamp(0.0, u32::MAX as f64);
    Timestamp::from_milliseconds(millis as u32)
}

/// Format subtitles as SRT file content.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a segment as a single console line.
fn display_segment(segment: &Segment) -> String {
    match segment.end {
        Some(end) => format!("[{:.2}s - {:.2}s]", segment.start, end),
        None => format!("[{:.2}s - end]", segment.start),
    }
}

/// Display preview of segments (first and last entries).
pub fn preview_segments(segments: &[Segment], head_count: usize, tail_count: usize) -> String {
    let lines: Vec<String> = segments.iter().map(display_segment).collect();
    preview(lines, head_count, tail_count, "\n")
}

/// Display preview of subtitles (first and last entries).
pub fn preview_subtitles(subtitles: &[Subtitle], head_count: usize, tail_count: usize) -> String {
    let entries: Vec<String> = subtitles.iter().map(|s| s.to_string()).collect();
    preview(entries, head_count, tail_count, "\n\n")
}

fn preview(entries: Vec<String>, head_count: usize, tail_count: usize, sep: &str) -> String {
    let total = entries.len();

    if total <= head_count + tail_count {
        entries.join(sep)
    } else {
        let mut out = Vec::with_capacity(head_count + tail_count + 1);
        out.extend_from_slice(&entries[0..head_count]);
        out.push("...".to_string());
        out.extend_from_slice(&entries[(total - tail_count)..total]);
        out.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordRecord> {
        vec![
            WordRecord::new(" Hello", 0.0, 0.4),
            WordRecord::new(" world.", 0.5, 0.9),
            WordRecord::new(" start", 1.0, 1.2),
            WordRecord::new(" end", 2.0, 2.2),
            WordRecord::new(" Bye.", 2.5, 2.9),
        ]
    }

    #[test]
    fn converts_segments_to_subtitles() {
        let segments = vec![Segment::closed(0.0, 0.95), Segment::open(2.3)];

        let subtitles = to_subtitles(&segments, &words());

        assert_eq!(subtitles.len(), 2);
        assert_eq!(subtitles[0].text, "Hello world.");
        assert_eq!(subtitles[1].text, "Bye.");
        assert_eq!(subtitles[1].end_time, Timestamp::from_milliseconds(2900));
    }

    #[test]
    fn silent_segment_gets_placeholder() {
        let subtitles = to_subtitles(&[Segment::open(5.0)], &words());

        assert_eq!(subtitles[0].text, "[no speech]");
        assert_eq!(subtitles[0].end_time, Timestamp::from_milliseconds(5000));
    }

    #[test]
    fn handles_empty_segments() {
        let subtitles = to_subtitles(&[], &words());
        assert!(subtitles.is_empty());
    }

    #[test]
    fn timestamp_saturates_on_huge_times() {
        assert_eq!(
            secs_to_timestamp(5.0e6),
            Timestamp::from_milliseconds(u32::MAX)
        );
        assert_eq!(secs_to_timestamp(1.5), Timestamp::from_milliseconds(1500));
    }

    #[test]
    fn json_uses_null_for_open_end() {
        let json = to_json(&[Segment::closed(0.0, 1.0), Segment::open(2.0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"start": 0.0, "end": 1.0},
                {"start": 2.0, "end": null}
            ])
        );
    }

    #[test]
    fn preview_elides_middle() {
        let segments: Vec<Segment> = (0..10)
            .map(|i| Segment::closed(i as f64, i as f64 + 0.5))
            .chain([Segment::open(10.0)])
            .collect();

        let preview = preview_segments(&segments, 2, 1);

        assert_eq!(
            preview,
            "[0.00s - 0.50s]\n[1.00s - 1.50s]\n...\n[10.00s - end]"
        );
    }

    #[test]
    fn short_preview_shows_everything() {
        let preview = preview_segments(&[Segment::open(0.0)], 3, 3);
        assert_eq!(preview, "[0.00s - end]");
    }
}
