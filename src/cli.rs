use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scout",
    version,
    about = "Explainable property scoring and shortlist CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate collection and publish the shortlist
    Score(ScoreCommand),
    /// Show the full scoring rationale for one candidate
    Explain(ExplainCommand),
    /// Map a saved RESO Web API response into candidate records
    Normalize(NormalizeCommand),
    /// Validate a scoring configuration
    Check(CheckCommand),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Local override layered on top of the base config
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub candidates: PathBuf,
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,
    /// Print the rendered shortlist to stdout instead of publishing files
    #[arg(long)]
    pub stdout: bool,
    /// Rendering used with --stdout
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExplainCommand {
    pub candidates: PathBuf,
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long)]
    pub id: String,
}

#[derive(Args)]
pub struct NormalizeCommand {
    pub response: PathBuf,
    #[arg(long, default_value = "output/candidates.json")]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
