use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "threatscope",
    version,
    about = "Keyword-driven threat suggestions for system descriptions"
)]
pub struct Args {
    /// Threat catalog JSON; defaults to the bundled catalog
    #[arg(long, global = true, env = "THREATSCOPE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a description and suggest threats
    Analyze(AnalyzeArgs),

    /// Write the offline script and its threats.json
    ExportScript(ExportScriptArgs),

    /// List catalog categories in classification order
    Categories,
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Description of the application or system; read from stdin if omitted
    pub description: Vec<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also write a Markdown report named threatscope-report-<millis>.md here
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Seed for threat selection, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, clap::Args)]
pub struct ExportScriptArgs {
    /// Directory to write threatscope.py and threats.json into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}
