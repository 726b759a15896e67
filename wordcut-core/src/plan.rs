//! Builds ordered keep segments from cut points.

use crate::error::{ConfigError, CutPointError};
use crate::types::{CutPoints, Segment};

/// Segment builder configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SegmentBuilder {
    /// Media duration in seconds, when known.
    ///
    /// Cut points are clamped to it and an open trailing segment that would
    /// start at or past it is dropped.
    pub duration: Option<f64>,
}

impl SegmentBuilder {
    /// Builder for media of unknown length.
    pub const UNBOUNDED: Self = Self { duration: None };

    pub fn with_duration(duration: f64) -> Result<Self, ConfigError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ConfigError::InvalidDuration(duration));
        }

        Ok(Self {
            duration: Some(duration),
        })
    }

    /// Merge cut points into keep segments.
    ///
    /// For `n` discarded spans the candidates are, in order:
    ///
    /// | Index       | Segment                     |
    /// |-------------|-----------------------------|
    /// | 0           | `0..starts[0]`              |
    /// | 0 < i < n   | `ends[i-1]..starts[i]`      |
    /// | n           | `ends[n-1]..` (open)        |
    ///
    /// Empty or inverted candidates are dropped and counted in
    /// [`SegmentPlan::dropped`]. No cut points at all keeps the whole media.
    ///
    /// # Errors
    ///
    /// Returns [`CutPointError`] if the lists differ in length, contain
    /// non-finite values, or pair into a discarded span that ends before it
    /// starts.
    pub fn build(&self, cut_points: &CutPoints) -> Result<SegmentPlan, CutPointError> {
        if cut_points.is_empty() {
            tracing::debug!("no cut points, keeping the whole media");
            return Ok(SegmentPlan {
                segments: vec![Segment::open(0.0)],
                dropped: 0,
            });
        }

        let (starts, ends) = self.validate(cut_points)?;
        let n = starts.len();

        let candidates = (0..=n).map(|i| {
            let start = if i == 0 { 0.0 } else { ends[i - 1] };
            let end = (i < n).then(|| starts[i]);
            Segment { start, end }
        });

        let mut segments = Vec::with_capacity(n + 1);
        let mut dropped = 0;

        for segment in candidates {
            if self.is_degenerate(&segment) {
                tracing::trace!(?segment, "dropping degenerate segment");
                dropped += 1;
            } else {
                segments.push(segment);
            }
        }

        if dropped > 0 {
            tracing::debug!(dropped, "dropped degenerate segments");
        }
        if segments.is_empty() {
            tracing::warn!("cut points discard the whole media");
        }

        Ok(SegmentPlan { segments, dropped })
    }

    /// Sort, check, and clamp the cut point lists.
    fn validate(&self, cut_points: &CutPoints) -> Result<(Vec<f64>, Vec<f64>), CutPointError> {
        let CutPoints { starts, ends } = cut_points;

        if starts.len() != ends.len() {
            return Err(CutPointError::Unbalanced {
                starts: starts.len(),
                ends: ends.len(),
            });
        }

        if starts.iter().chain(ends).any(|t| !t.is_finite()) {
            return Err(CutPointError::NonFinite);
        }

        let mut starts = starts.clone();
        let mut ends = ends.clone();
        starts.sort_by(f64::total_cmp);
        ends.sort_by(f64::total_cmp);

        if let Some((index, (&start, &end))) = starts
            .iter()
            .zip(&ends)
            .enumerate()
            .find(|(_, (start, end))| end < start)
        {
            return Err(CutPointError::InvertedSpan { index, start, end });
        }

        let upper = self.duration.unwrap_or(f64::INFINITY);
        let clamp = |t: &mut f64| *t = t.clamp(0.0, upper);
        starts.iter_mut().for_each(clamp);
        ends.iter_mut().for_each(clamp);

        Ok((starts, ends))
    }

    fn is_degenerate(&self, segment: &Segment) -> bool {
        match (segment.end, self.duration) {
            (Some(end), _) => end <= segment.start,
            (None, Some(duration)) => duration <= segment.start,
            (None, None) => false,
        }
    }
}

/// Ordered, non-overlapping keep segments.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentPlan {
    pub segments: Vec<Segment>,
    /// Number of zero-length or inverted candidates removed
    pub dropped: usize,
}

impl SegmentPlan {
    /// Total kept time, `None` if the plan ends open and the duration is unknown.
    pub fn kept_duration(&self, duration: Option<f64>) -> Option<f64> {
        self.segments.iter().map(|s| s.duration(duration)).sum()
    }

    /// Discarded spans: the complement of the plan over the media timeline.
    ///
    /// The last span is open when the plan ends closed and the duration is
    /// unknown.
    pub fn discarded(&self, duration: Option<f64>) -> Vec<Segment> {
        let mut gaps = Vec::new();
        let mut cursor = Some(0.0);

        for segment in &self.segments {
            if let Some(from) = cursor
                && segment.start > from
            {
                gaps.push(Segment::closed(from, segment.start));
            }
            cursor = segment.end;
        }

        if let Some(from) = cursor {
            match duration {
                Some(duration) if from < duration => gaps.push(Segment::closed(from, duration)),
                Some(_) => {}
                None => gaps.push(Segment::open(from)),
            }
        }

        gaps
    }
}
