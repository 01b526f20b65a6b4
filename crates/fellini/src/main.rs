//! Fellini CLI binary.
//!
//! This binary provides command-line access to the screenplay pipeline:
//! generate a screenplay from a story idea and a target length, optionally
//! bundling the run directory into a zip archive.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_generate};

    // Load .env for GEMINI_API_KEY before anything touches the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate(args) => {
            handle_generate(args).await?;
        }
    }

    Ok(())
}
