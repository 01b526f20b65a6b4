//! Generate command handler.

use super::{GenerateArgs, OutputFormat};
use fellini::{
    Director, FelliniConfig, FelliniResult, FileSystemWorkspace, GeminiClient, ScreenplayStore,
    TracingSink,
};
use std::sync::Arc;

/// Run the full screenplay pipeline for a story idea.
pub async fn handle_generate(args: GenerateArgs) -> FelliniResult<()> {
    // Load configuration, then apply CLI overrides
    let mut config = match &args.config {
        Some(path) => FelliniConfig::from_file(path)?,
        None => FelliniConfig::load()?,
    };
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    if let Some(data_dir) = &args.data_dir {
        config = config.with_data_dir(data_dir.to_string_lossy().into_owned());
    }

    tracing::info!(
        minutes = args.minutes,
        data_dir = %config.data_dir(),
        "Generating screenplay"
    );

    let driver = match config.generation().model() {
        Some(model) => GeminiClient::with_default_model(model.clone())?,
        None => GeminiClient::new()?,
    };
    let store = FileSystemWorkspace::new(config.data_dir())?;
    let director = Director::new(driver, store, Arc::new(TracingSink), config);

    let execution = director.execute(&args.idea, args.minutes).await?;

    match args.format {
        OutputFormat::Human => {
            println!("\nScreenplay Generation Summary:");
            println!("==============================");
            println!("Story idea: {}", execution.story_idea);
            println!("Target length: {} minutes", execution.length_minutes);
            println!("Scenes: {}", execution.scenes.len());
            println!(
                "Estimated runtime: {}:{:02}",
                execution.total_duration_seconds() / 60,
                execution.total_duration_seconds() % 60
            );
            if let Some(run) = director.store().active_run() {
                println!("Run directory: {}", run.display());
            }
            println!();
            println!("{}", execution.document);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&execution).expect("execution serializes");
            println!("{}", json);
        }
    }

    if args.archive {
        let archive = director.store().archive_run().await?;
        println!("Archived run to {}", archive.display());
    }

    Ok(())
}
