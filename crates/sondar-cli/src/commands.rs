//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Sondador: reachability checks for a deployed page's resources
#[derive(Parser, Debug)]
#[command(name = "sondador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe every resource the page references and print a report
    Check(CheckArgs),

    /// List the references a page would be probed for, without probing
    Extract(ExtractArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Page to check (scheme defaults to https)
    pub url: String,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value = "10000")]
    pub timeout_ms: u64,

    /// Probes in flight at once within a category (1 = strictly sequential)
    #[arg(short = 'j', long, default_value = "1")]
    pub jobs: usize,

    /// Cap on extracted hyperlinks
    #[arg(long, default_value = "20")]
    pub link_limit: usize,

    /// Count responses a header probe cannot introspect as failures
    #[arg(long)]
    pub strict_opaque: bool,

    /// Skip the meta-tag audit
    #[arg(long)]
    pub skip_meta: bool,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Page to scan (scheme defaults to https)
    pub url: String,

    /// Cap on extracted hyperlinks
    #[arg(long, default_value = "20")]
    pub link_limit: usize,
}

/// Color argument for the command line
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}
