//! Command line front end for `wordcut-core`.
//!
//! Each subcommand resolves its arguments into a `Config` and hands the shared
//! part to [`cut::execute`], which loads the transcript, plans segments and
//! writes them as JSON or as an SRT review file.

pub mod cli;
pub mod config;
pub mod cut;
pub mod media;
pub mod output;
pub mod silence;
pub mod tokens;
