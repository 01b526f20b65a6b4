//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Fellini - LLM-driven screenplay generation with pacing-controlled scene writing
#[derive(Parser, Debug)]
#[command(name = "fellini")]
#[command(about = "Generate a screenplay from a story idea", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a screenplay from a story idea
    Generate(GenerateArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The story idea to develop
    pub idea: String,

    /// Target film length in minutes
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub minutes: u32,

    /// Root directory for run output (overrides configuration)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Model identifier (overrides configuration)
    #[arg(long)]
    pub model: Option<String>,

    /// Load configuration from a specific file instead of the default chain
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bundle the run directory into a zip archive after generation
    #[arg(long)]
    pub archive: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable summary plus the assembled document
    Human,
    /// Full execution as JSON
    Json,
}
