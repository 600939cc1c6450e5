//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --verbose) are inherited by all
//! subcommands. Running without a subcommand builds.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// rulemerge - combine AI assistant rule fragments into one document
#[derive(Parser, Debug)]
#[command(name = "rulemerge")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (defaults to ./rulemerge.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub build: BuildArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Combine the rule fragments and write every destination (default)
    Build(BuildArgs),

    /// Fail when a destination differs from what a build would write
    Check(SourceArgs),

    /// Print the order fragments would be combined in
    Order(SourceArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Directory holding the rule fragments
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination file; repeat to write several (replaces configured ones)
    #[arg(short, long = "output", value_name = "PATH")]
    pub outputs: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    #[command(flatten)]
    pub paths: SourceArgs,

    /// Show what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,
}
