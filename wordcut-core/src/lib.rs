//! wordcut-core: turns word-level transcripts into keep segments.
//!
//! A recording is trimmed by discarding spans and keeping everything between
//! them. Discarded spans come from one of two signals in the transcript:
//! spoken control tokens around a fragment, or silence between words.
//!
//! # Architecture
//!
//! The pipeline runs left to right, each stage a pure function of its input:
//!
//! - [`transcript`]: parses recognizer JSON into validated [`types::WordRecord`]s
//! - [`extract`]: scans words under a [`extract::Policy`] into [`types::CutPoints`]
//! - [`plan`]: merges cut points into ordered [`types::Segment`]s
//!
//! # Quick Start
//!
//! ```
//! use wordcut_core::extract::{CutConfig, TokenMatch};
//! use wordcut_core::plan::SegmentBuilder;
//! use wordcut_core::transcript::parse_transcript;
//! use wordcut_core::types::Segment;
//!
//! let words = parse_transcript(r#"[
//!     {"text": "keep", "start": 0.0, "end": 0.5},
//!     {"text": "start", "start": 1.0, "end": 1.5},
//!     {"text": "drop", "start": 2.0, "end": 2.5},
//!     {"text": "end", "start": 3.0, "end": 3.5}
//! ]"#)?;
//!
//! let config = CutConfig::control_words(0.0, TokenMatch::default())?;
//! let extraction = config.extract(&words);
//! let plan = SegmentBuilder::UNBOUNDED.build(&extraction.cut_points)?;
//!
//! assert_eq!(plan.segments, vec![Segment::closed(0.0, 1.0), Segment::open(3.5)]);
//! # Ok::<(), wordcut_core::error::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod plan;
pub mod transcript;
pub mod types;
