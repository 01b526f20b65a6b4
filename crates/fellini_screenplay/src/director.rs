//! The pipeline coordinator.

use crate::{FelliniConfig, PacingTracker, PromptAgent, assemble, prompts, split_scenes};
use fellini_core::Timestamp;
use fellini_error::{FelliniResult, ScreenplayError, ScreenplayErrorKind};
use fellini_interface::{
    FelliniDriver, SceneRecord, ScreenplayExecution, TranscriptRecord, TranscriptSink,
};
use fellini_storage::ScreenplayStore;
use std::sync::Arc;

const COORDINATOR_NAME: &str = "Director";
const COORDINATOR_ROLE: &str = "Creative Director and Coordinator";

/// Coordinates the screenplay generation pipeline.
///
/// All collaborators are injected at construction: the text-generation
/// driver, the per-run artifact store, and the transcript sink. The
/// dependency graph is fully visible here, and each seam can be substituted
/// with a test double.
///
/// Execution is strictly sequential: each stage's request is issued only
/// after the previous stage's response has been received, and there is no
/// cancellation once a run starts. The only observable side channels are the
/// transcript sink and the per-scene files written as the run progresses.
pub struct Director<D, S> {
    driver: D,
    store: S,
    sink: Arc<dyn TranscriptSink>,
    config: FelliniConfig,
}

impl<D, S> Director<D, S>
where
    D: FelliniDriver,
    S: ScreenplayStore,
{
    /// Create a coordinator from its collaborators.
    pub fn new(driver: D, store: S, sink: Arc<dyn TranscriptSink>, config: FelliniConfig) -> Self {
        Self {
            driver,
            store,
            sink,
            config,
        }
    }

    /// The injected text-generation driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The injected artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &FelliniConfig {
        &self.config
    }

    fn narrate(&self, text: &str) {
        self.sink
            .record(TranscriptRecord::status(COORDINATOR_NAME, COORDINATOR_ROLE, text));
    }

    /// Generate a complete screenplay for a story idea and target length.
    ///
    /// Runs every stage in order, writes per-scene artifacts as they are
    /// produced, and keeps generating gap-filling scenes until the estimated
    /// runtime reaches 90% of `length_minutes`.
    ///
    /// # Errors
    ///
    /// Rejects an empty story idea or a length outside 1-10 minutes before
    /// any request is made. A provider failure at any stage aborts the run:
    /// scenes already written remain on disk, but no package is produced.
    #[tracing::instrument(skip(self, story_idea))]
    pub async fn execute(
        &self,
        story_idea: &str,
        length_minutes: u32,
    ) -> FelliniResult<ScreenplayExecution> {
        if story_idea.trim().is_empty() {
            return Err(ScreenplayError::new(ScreenplayErrorKind::EmptyStoryIdea).into());
        }
        if !(1..=10).contains(&length_minutes) {
            return Err(
                ScreenplayError::new(ScreenplayErrorKind::LengthOutOfRange(length_minutes)).into(),
            );
        }

        let run_dir = self.store.begin_run().await?;
        tracing::info!(run = %run_dir.display(), "Starting screenplay run");

        let generation = self.config.generation();
        let sink = self.sink.as_ref();
        let director = PromptAgent::new(
            COORDINATOR_NAME,
            COORDINATOR_ROLE,
            &self.driver,
            sink,
            generation,
        );
        let character_writer = PromptAgent::new(
            "CharacterWriter",
            "Character Developer",
            &self.driver,
            sink,
            generation,
        );
        let plot_writer =
            PromptAgent::new("PlotWriter", "Plot Developer", &self.driver, sink, generation);
        let scene_descriptor = PromptAgent::new(
            "SceneDescriptor",
            "Scene Developer",
            &self.driver,
            sink,
            generation,
        );
        let screenwriter = PromptAgent::new(
            "Screenwriter",
            "Final Screenplay Writer",
            &self.driver,
            sink,
            generation,
        );
        let time_stamper =
            PromptAgent::new("TimeStamper", "Scene Timer", &self.driver, sink, generation);
        let image_prompter = PromptAgent::new(
            "ImagePrompter",
            "Visual Prompter",
            &self.driver,
            sink,
            generation,
        );

        // Establish creative direction
        self.narrate("Starting creative direction phase...");
        let creative_direction = director
            .generate(
                &prompts::creative_direction_system(length_minutes),
                &prompts::creative_direction_user(story_idea, length_minutes),
            )
            .await?;
        self.narrate("Creative direction established. Moving to character development...");

        let characters = character_writer
            .generate(
                prompts::characters_system(),
                &prompts::characters_user(story_idea, &creative_direction),
            )
            .await?;
        self.narrate("Characters developed. Moving to plot development...");

        let plot = plot_writer
            .generate(
                prompts::plot_system(),
                &prompts::plot_user(story_idea, &characters, &creative_direction),
            )
            .await?;
        self.narrate("Plot structure created. Moving to scene breakdown...");

        let scene_outlines = scene_descriptor
            .generate(
                prompts::outline_system(),
                &prompts::outline_user(&plot, &characters, &creative_direction),
            )
            .await?;
        self.narrate("Scene outlines created. Writing detailed scenes...");

        let outlines = split_scenes(&scene_outlines);
        tracing::info!(outlines = outlines.len(), "Scene outline split complete");

        let mut pacing = PacingTracker::new(length_minutes);
        let mut scenes: Vec<SceneRecord> = Vec::new();

        // Write each outlined scene in detail, with its timing and visual
        for (offset, outline) in outlines.iter().enumerate() {
            let index = offset + 1;
            self.narrate(&format!("Writing detailed scene {index}..."));

            let script = screenwriter
                .generate(
                    prompts::scene_system(),
                    &prompts::scene_user(outline, &characters, &creative_direction),
                )
                .await?;
            self.store.save_scene(index, &script).await?;

            let duration = Timestamp::parse_lenient(
                &time_stamper
                    .generate(prompts::timing_system(), &prompts::timing_user(&script))
                    .await?,
            );

            let image_prompt = image_prompter
                .generate(
                    prompts::image_prompt_system(),
                    &prompts::image_prompt_user(outline),
                )
                .await?;

            pacing.record(duration);
            self.narrate(&format!("Scene {index} completed with timestamp: {duration}"));
            scenes.push(SceneRecord {
                index,
                script,
                duration,
                image_prompt,
            });
        }

        // Keep adding scenes until the estimated runtime reaches the
        // threshold. There is no minimum-progress guarantee here: the
        // optional cap is the only bound on this loop.
        let mut gap_scenes = 0u32;
        while !pacing.satisfied() {
            if let Some(cap) = self.config.pacing().max_gap_scenes()
                && gap_scenes >= *cap
            {
                tracing::warn!(
                    cap,
                    elapsed_seconds = pacing.elapsed_seconds(),
                    target_seconds = pacing.target_seconds(),
                    "Gap-scene cap reached before target runtime"
                );
                break;
            }

            self.narrate(&format!(
                "Current length: {}:{:02}. Need more content...",
                pacing.elapsed_seconds() / 60,
                pacing.elapsed_seconds() % 60,
            ));

            let index = scenes.len() + 1;
            let script = screenwriter
                .generate(
                    &prompts::gap_scene_system(pacing.remaining_seconds()),
                    &prompts::gap_scene_user(
                        &plot,
                        &characters,
                        &creative_direction,
                        pacing.elapsed_seconds(),
                        pacing.target_seconds(),
                    ),
                )
                .await?;
            self.store.save_scene(index, &script).await?;

            let duration = Timestamp::parse_lenient(
                &time_stamper
                    .generate(prompts::timing_system(), &prompts::timing_user(&script))
                    .await?,
            );

            // Gap scenes prompt the visual from the full script, not an outline
            let image_prompt = image_prompter
                .generate(
                    prompts::image_prompt_system(),
                    &prompts::image_prompt_user(&script),
                )
                .await?;

            pacing.record(duration);
            self.narrate(&format!("Scene {index} completed with timestamp: {duration}"));
            scenes.push(SceneRecord {
                index,
                script,
                duration,
                image_prompt,
            });
            gap_scenes += 1;
        }

        self.narrate("Compiling final screenplay...");
        let document = assemble(story_idea, &characters, &plot, &scenes);
        self.store.save_package(&document).await?;
        self.narrate("Screenplay compilation complete!");

        tracing::info!(
            scenes = scenes.len(),
            elapsed_seconds = pacing.elapsed_seconds(),
            target_seconds = pacing.target_seconds(),
            "Screenplay run complete"
        );

        Ok(ScreenplayExecution {
            story_idea: story_idea.to_string(),
            length_minutes,
            creative_direction,
            characters,
            plot,
            scenes,
            document,
        })
    }
}
