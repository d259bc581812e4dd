//! Command-line interface definitions for `helpful-merge`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser, ValueEnum};
use helpful_merge::ArrayStrategy;

/// Array strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Merge arrays index by index.
    Replace,
    /// Append source elements to the target array.
    Push,
}

impl From<StrategyArg> for ArrayStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Replace => Self::Replace,
            StrategyArg::Push => Self::Push,
        }
    }
}

/// Parsed CLI arguments for `helpful-merge`.
#[derive(Debug, Parser)]
#[command(name = "helpful-merge")]
#[command(about = "Merge JSON documents, suggesting fixes for mistyped keys")]
#[command(version)]
pub struct Args {
    /// Documents merged into the target, later ones winning.
    #[arg(required = true, value_name = "SOURCES")]
    pub sources: Vec<Utf8PathBuf>,
    /// Document merged into (defaults to an empty object).
    #[arg(long, value_name = "PATH")]
    pub target: Option<Utf8PathBuf>,
    /// Seal the top-level target so unknown keys are rejected.
    #[arg(long = "seal-target")]
    pub should_seal_target: bool,
    /// Merge behaviour flags.
    #[command(flatten)]
    pub merge: MergeArgs,
    /// Locale used for diagnostics.
    #[arg(long, value_name = "TAG", default_value = "en-US")]
    pub locale: String,
    /// Directory of `.ftl` files overriding the embedded messages.
    #[arg(long, value_name = "DIR")]
    pub messages: Option<Utf8PathBuf>,
    /// Write the result here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<Utf8PathBuf>,
    /// Emit compact rather than pretty JSON.
    #[arg(long = "compact")]
    pub is_compact: bool,
}

/// Merge behaviour flags, layered over `--options`.
#[derive(Debug, Clone, ClapArgs)]
pub struct MergeArgs {
    /// JSON document holding merge options.
    #[arg(long, value_name = "PATH")]
    pub options: Option<Utf8PathBuf>,
    /// Merge nested containers recursively.
    #[arg(long = "deep")]
    pub is_deep: bool,
    /// How arrays are combined.
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub array_strategy: Option<StrategyArg>,
    /// Assign arrays by reference instead of merging them.
    #[arg(long = "use-reference-if-array")]
    pub should_use_reference_if_array: bool,
    /// Assign containers by reference when the target has no value.
    #[arg(long = "use-reference-if-target-unset")]
    pub should_use_reference_if_target_unset: bool,
}
