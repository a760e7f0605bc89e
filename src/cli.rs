use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Anniversary-effect inference for daily pageview series.
#[derive(Parser)]
#[command(
    name = "anniv",
    version,
    about = "Test whether a daily metric shifts around a recurring calendar date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run every procedure and write a JSON report.
    Analyze(AnalyzeArgs),
    /// Bootstrap a confidence interval for the window/baseline difference.
    Bootstrap(BootstrapArgs),
    /// Permutation test of the window/baseline difference.
    Permute(PermuteArgs),
    /// Correlate values with distance and fit a distance regression.
    Correlate(CorrelateArgs),
    /// Pivot values into a month-day by year table (CSV).
    Seasonal(SeasonalArgs),
}

/// Options shared by every subcommand. Flags override the TOML file.
#[derive(clap::Args, Debug, Default)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input Parquet path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override anniversary (MM-DD) from config.
    #[arg(short, long)]
    pub anniversary: Option<String>,

    /// Keep only rows for this article title.
    #[arg(long)]
    pub article: Option<String>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override window radius (days) from config.
    #[arg(short, long)]
    pub radius: Option<u32>,

    /// Override window distance mode (calendar | day-of-year).
    #[arg(long)]
    pub mode: Option<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include bootstrap and null distributions in the report.
    #[arg(long)]
    pub include_distributions: bool,
}

/// Arguments for the `bootstrap` subcommand.
#[derive(clap::Args)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override number of resamples from config.
    #[arg(short = 'n', long)]
    pub n_resamples: Option<usize>,

    /// Override confidence level from config.
    #[arg(long)]
    pub confidence: Option<f64>,
}

/// Arguments for the `permute` subcommand.
#[derive(clap::Args)]
pub struct PermuteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override number of permutations from config.
    #[arg(short = 'n', long)]
    pub n_permutations: Option<usize>,
}

/// Arguments for the `correlate` subcommand.
#[derive(clap::Args)]
pub struct CorrelateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also write the regression summary to this file.
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

/// Arguments for the `seasonal` subcommand.
#[derive(clap::Args)]
pub struct SeasonalArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path for the CSV table (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
