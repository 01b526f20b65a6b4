//! Integration tests for the pipeline coordinator.
//!
//! A scripted driver returns canned responses in call order, which pins the
//! exact number and sequence of provider calls each scenario should make.

use async_trait::async_trait;
use fellini_core::{GenerateRequest, GenerateResponse, Timestamp};
use fellini_error::{
    FelliniError, FelliniErrorKind, FelliniResult, ProviderError, ProviderErrorKind,
    ScreenplayErrorKind,
};
use fellini_interface::{Direction, FelliniDriver, MemorySink};
use fellini_screenplay::{Director, FelliniConfig, assemble};
use fellini_storage::ScreenplayStore;
use std::collections::{BTreeMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const IDEA: &str = "A lighthouse keeper discovers a message in a bottle";

/// Driver that replays a fixed response sequence and records every request.
///
/// An exhausted script fails the call like a dead provider would, so a
/// scenario that makes more calls than scripted fails loudly.
struct ScriptedDriver {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedDriver {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FelliniDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> FelliniResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(text) => Ok(GenerateResponse { text }),
            None => {
                Err(ProviderError::new(ProviderErrorKind::ApiRequest("script exhausted".into()))
                    .into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model-v1"
    }
}

/// In-memory store double, substituting for the filesystem workspace.
#[derive(Default)]
struct MemoryStore {
    scenes: Mutex<BTreeMap<usize, String>>,
    package: Mutex<Option<String>>,
    active: Mutex<Option<PathBuf>>,
}

impl MemoryStore {
    fn scene_indices(&self) -> Vec<usize> {
        self.scenes.lock().unwrap().keys().copied().collect()
    }

    fn package(&self) -> Option<String> {
        self.package.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScreenplayStore for MemoryStore {
    async fn begin_run(&self) -> FelliniResult<PathBuf> {
        let dir = PathBuf::from("mem/run");
        *self.active.lock().unwrap() = Some(dir.clone());
        Ok(dir)
    }

    async fn save_scene(&self, index: usize, script: &str) -> FelliniResult<PathBuf> {
        self.scenes.lock().unwrap().insert(index, script.to_string());
        Ok(PathBuf::from(format!("mem/run/scenes/scene_{index:02}.txt")))
    }

    async fn save_package(&self, document: &str) -> FelliniResult<PathBuf> {
        *self.package.lock().unwrap() = Some(document.to_string());
        Ok(PathBuf::from("mem/run/screenplay_package.txt"))
    }

    async fn archive_run(&self) -> FelliniResult<PathBuf> {
        Ok(PathBuf::from("mem/run.zip"))
    }

    async fn clear_run(&self) -> FelliniResult<()> {
        Ok(())
    }

    fn active_run(&self) -> Option<PathBuf> {
        self.active.lock().unwrap().clone()
    }
}

fn director_with(
    responses: &[&str],
    config: FelliniConfig,
) -> (Director<ScriptedDriver, MemoryStore>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let director = Director::new(
        ScriptedDriver::new(responses),
        MemoryStore::default(),
        sink.clone(),
        config,
    );
    (director, sink)
}

fn expect_screenplay_error(err: FelliniError) -> ScreenplayErrorKind {
    match err.kind() {
        FelliniErrorKind::Screenplay(e) => e.kind.clone(),
        other => panic!("expected screenplay error, got {other:?}"),
    }
}

fn expect_provider_error(err: FelliniError) -> ProviderErrorKind {
    match err.kind() {
        FelliniErrorKind::Provider(e) => e.kind.clone(),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_pipeline_runs_stages_in_order() {
    // Two outlines at 45 seconds each reach the 54-second threshold for a
    // one-minute film without any gap-filling.
    let (director, _sink) = director_with(
        &[
            "the creative direction",
            "the character profiles",
            "the plot",
            "Scene 1: The shore at dusk Scene 2: The lamp room",
            "SCENE ONE SCRIPT",
            "0:45",
            "image prompt one",
            "SCENE TWO SCRIPT",
            "00:45",
            "image prompt two",
        ],
        FelliniConfig::default(),
    );

    let execution = director.execute(IDEA, 1).await.expect("execution failed");

    assert_eq!(execution.creative_direction, "the creative direction");
    assert_eq!(execution.characters, "the character profiles");
    assert_eq!(execution.plot, "the plot");
    assert_eq!(execution.scenes.len(), 2);
    assert_eq!(execution.scenes[0].index, 1);
    assert_eq!(execution.scenes[0].script, "SCENE ONE SCRIPT");
    assert_eq!(execution.scenes[0].duration.to_string(), "00:45");
    assert_eq!(execution.scenes[1].index, 2);
    assert_eq!(execution.scenes[1].image_prompt, "image prompt two");
    assert_eq!(execution.total_duration_seconds(), 90);

    // Exactly ten provider calls: four fixed stages plus three per scene
    let requests = director.driver().requests();
    assert_eq!(requests.len(), 10);

    // Data dependencies: the plot request sees the characters, the scene
    // request sees its outline
    assert!(requests[2].messages[1].content.contains("the character profiles"));
    assert!(requests[4].messages[1].content.contains("1: The shore at dusk"));

    // Artifacts: both scenes persisted, package written
    assert_eq!(director.store().scene_indices(), vec![1, 2]);
    let package = director.store().package().expect("package saved");
    assert_eq!(package, execution.document);
}

#[tokio::test]
async fn test_gap_filling_until_threshold() {
    // One initial outline timed at 45 seconds leaves the run short of the
    // 54-second threshold, forcing exactly one gap-filling iteration.
    let (director, _sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: A keeper finds a bottle",
            "INITIAL SCENE",
            "0:45",
            "initial image",
            "GAP SCENE",
            "00:45",
            "gap image",
        ],
        FelliniConfig::default(),
    );

    let execution = director.execute(IDEA, 1).await.expect("execution failed");

    assert_eq!(execution.scenes.len(), 2);
    assert_eq!(execution.scenes[1].index, 2);
    assert_eq!(execution.scenes[1].script, "GAP SCENE");
    assert_eq!(execution.total_duration_seconds(), 90);

    let requests = director.driver().requests();
    assert_eq!(requests.len(), 10);

    // The gap-filling request is informed of current and target runtime
    let gap_request = &requests[7].messages[1].content;
    assert!(gap_request.contains("Current Runtime: 0:45"));
    assert!(gap_request.contains("Target Runtime: 1:00"));

    // The gap scene's visual is prompted from the full script
    assert!(requests[9].messages[1].content.contains("GAP SCENE"));
}

#[tokio::test]
async fn test_malformed_duration_falls_back() {
    let (director, _sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: A Scene 2: B",
            "SCRIPT ONE",
            "about a minute",
            "image one",
            "SCRIPT TWO",
            "0:45",
            "image two",
        ],
        FelliniConfig::default(),
    );

    let execution = director.execute(IDEA, 1).await.expect("execution failed");

    assert_eq!(execution.scenes[0].duration, Timestamp::FALLBACK);
    assert_eq!(execution.scenes[0].duration.to_string(), "00:45");
}

#[tokio::test]
async fn test_provider_failure_aborts_run() {
    // The script runs dry at the first timing request: the scene file is
    // already on disk, but no package may be produced.
    let (director, _sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: A keeper finds a bottle",
            "SCENE ONE SCRIPT",
        ],
        FelliniConfig::default(),
    );

    let err = director.execute(IDEA, 1).await.unwrap_err();
    assert!(matches!(
        expect_provider_error(err),
        ProviderErrorKind::ApiRequest(_)
    ));

    assert_eq!(director.store().scene_indices(), vec![1]);
    assert!(director.store().package().is_none());
}

#[tokio::test]
async fn test_empty_response_is_a_provider_failure() {
    let (director, _sink) = director_with(&["   \n"], FelliniConfig::default());

    let err = director.execute(IDEA, 1).await.unwrap_err();
    assert_eq!(expect_provider_error(err), ProviderErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_rejects_invalid_invocations() {
    let (director, _sink) = director_with(&[], FelliniConfig::default());

    let err = director.execute("   ", 1).await.unwrap_err();
    assert_eq!(expect_screenplay_error(err), ScreenplayErrorKind::EmptyStoryIdea);

    let err = director.execute(IDEA, 0).await.unwrap_err();
    assert_eq!(
        expect_screenplay_error(err),
        ScreenplayErrorKind::LengthOutOfRange(0)
    );

    let err = director.execute(IDEA, 11).await.unwrap_err();
    assert_eq!(
        expect_screenplay_error(err),
        ScreenplayErrorKind::LengthOutOfRange(11)
    );

    // Validation happens before any provider call
    assert!(director.driver().requests().is_empty());
}

#[tokio::test]
async fn test_transcript_pairs_every_call() {
    let (director, sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: Only scene",
            "SCRIPT",
            "1:00",
            "image",
        ],
        FelliniConfig::default(),
    );

    director.execute(IDEA, 1).await.expect("execution failed");

    let records = sink.records();
    let outgoing: Vec<_> = records
        .iter()
        .filter(|r| r.direction == Direction::Outgoing)
        .collect();
    let incoming: Vec<_> = records
        .iter()
        .filter(|r| r.direction == Direction::Incoming)
        .collect();

    // One outgoing and one incoming record per provider call
    assert_eq!(outgoing.len(), 7);
    assert_eq!(incoming.len(), 7);
    assert_eq!(outgoing[0].agent, "Director");
    assert_eq!(outgoing[1].agent, "CharacterWriter");
    assert_eq!(incoming[1].text, "characters");
    assert_eq!(outgoing[5].agent, "TimeStamper");
    assert_eq!(outgoing[5].role, "Scene Timer");

    // Coordinator narration is interleaved as status records
    assert!(
        records
            .iter()
            .any(|r| r.direction == Direction::Status && r.text.contains("creative direction"))
    );
}

#[tokio::test]
async fn test_gap_scene_cap_bounds_the_loop() {
    // Near-zero duration estimates would loop forever; the optional cap
    // stops the run after two gap scenes and still assembles.
    let (director, _sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: Only scene",
            "SCRIPT ONE",
            "0:01",
            "image one",
            "GAP ONE",
            "0:01",
            "gap image one",
            "GAP TWO",
            "0:01",
            "gap image two",
        ],
        FelliniConfig::default().with_max_gap_scenes(2),
    );

    let execution = director.execute(IDEA, 1).await.expect("execution failed");

    assert_eq!(execution.scenes.len(), 3);
    assert_eq!(execution.total_duration_seconds(), 3);
    assert!(director.store().package().is_some());
}

#[tokio::test]
async fn test_document_matches_pure_assembly() {
    let (director, _sink) = director_with(
        &[
            "direction",
            "characters",
            "plot",
            "Scene 1: Only scene",
            "SCRIPT",
            "1:00",
            "image",
        ],
        FelliniConfig::default(),
    );

    let execution = director.execute(IDEA, 1).await.expect("execution failed");

    let reassembled = assemble(
        &execution.story_idea,
        &execution.characters,
        &execution.plot,
        &execution.scenes,
    );
    assert_eq!(execution.document, reassembled);
    assert!(execution.document.starts_with("Title: A lighthouse keeper discovers a...\n"));
    assert!(execution.document.contains("Scene 1: 01:00\nImage Prompt: image\nSCRIPT"));
}
