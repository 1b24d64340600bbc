//! Clap argument definitions for the `lokey` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "lokey")]
#[command(about = "Keyword assistant for local-business blog SEO")]
pub struct Cli {
    /// Configuration file (defaults apply when omitted or missing)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lokey facets`.
#[derive(Args, Debug, Clone)]
pub struct FacetsCommand {
    /// Business name
    pub place: String,

    /// Free-form business description
    pub description: String,

    /// Address text to resolve instead of the description
    #[arg(long)]
    pub address: Option<String>,

    /// Use the model backend for facet extraction when credentials exist
    #[arg(long)]
    pub model: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `lokey select`.
#[derive(Args, Debug, Clone)]
pub struct SelectCommand {
    /// Facets JSON file, or "-" for stdin
    #[arg(long)]
    pub facets: String,

    /// Month (1-12) for seasonality, defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,

    /// Skip trend lookups, scoring with neutral trend signals
    #[arg(long)]
    pub no_trends: bool,

    /// Use the model backend for candidate generation when credentials exist
    #[arg(long)]
    pub model: bool,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `lokey rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// Facets JSON file, or "-" for stdin
    #[arg(long)]
    pub facets: String,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Arguments for `lokey guideline`.
#[derive(Args, Debug, Clone)]
pub struct GuidelineCommand {
    /// Keywords, most important first
    #[arg(required = true)]
    pub keywords: Vec<String>,

    /// Writing tone: 실사 리뷰 톤, 전문가 톤, 친근한 톤, 데이터 톤
    #[arg(long, default_value = "실사 리뷰 톤")]
    pub tone: String,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

/// Supported `lokey` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the location and extract business facets
    Facets(FacetsCommand),

    /// Recommend low-competition keywords with evaluation stats
    Select(SelectCommand),

    /// Rank the broad keyword pool and build strategy combinations
    Rank(RankCommand),

    /// Produce a blog-writing guideline for chosen keywords
    Guideline(GuidelineCommand),
}
