//! Tokens subcommand - cut fragments enclosed by spoken control tokens.

use crate::cli::CommonArgs;
use crate::config::CommonConfig;
use eyre::{Result, WrapErr};
use wordcut_core::extract::{CutConfig, DEFAULT_END_TOKEN, DEFAULT_START_TOKEN, TokenMatch};

/// CLI arguments for control token cutting.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Word that opens a discarded fragment
    #[arg(long, default_value = DEFAULT_START_TOKEN)]
    pub start_token: String,

    /// Word that closes a discarded fragment
    #[arg(long, default_value = DEFAULT_END_TOKEN)]
    pub end_token: String,

    /// Match tokens with exact casing
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Resolved configuration for control token cutting.
#[derive(Debug)]
pub struct Config {
    pub common: CommonConfig,
    pub cut: CutConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let tokens =
            TokenMatch::new(args.start_token, args.end_token).case_sensitive(args.case_sensitive);
        let cut = CutConfig::control_words(args.common.offset, tokens)
            .wrap_err("invalid control token configuration")?;

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
        "cutting at control tokens"
    );

    crate::cut::execute(config.common, config.cut)
}
