//! Silence subcommand - cut gaps between words.

use crate::cli::CommonArgs;
use crate::config::CommonConfig;
use eyre::{Result, WrapErr};
use wordcut_core::extract::{CutConfig, DEFAULT_SILENCE_THRESHOLD};

/// CLI arguments for silence cutting.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minimum gap between words, in seconds, to cut
    #[arg(long, default_value_t = DEFAULT_SILENCE_THRESHOLD)]
    pub threshold: f64,
}

/// Resolved configuration for silence cutting.
#[derive(Debug)]
pub struct Config {
    pub common: CommonConfig,
    pub cut: CutConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let cut = CutConfig::silence(args.common.offset, args.threshold)
            .wrap_err("invalid silence configuration")?;

        Ok(Self {
            common: args.common.try_into()?,
            cut,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        transcript = ?config.common.transcript.display(),
        policy = ?config.cut.policy,
        "cutting silence"
    );

    crate::cut::execute(config.common, config.cut)
}
