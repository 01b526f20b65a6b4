//! Stage instruction templates.
//!
//! One fixed system/user instruction pair per pipeline stage. The user
//! instruction carries the accumulated context from earlier stages; the
//! system instruction is the stage's standing brief.

/// Creative-direction brief. Roughly two scenes per minute keeps the pacing
/// workable downstream, so the target scene count is stated up front.
pub(crate) fn creative_direction_system(length_minutes: u32) -> String {
    format!(
        "You are a creative film director. Provide creative direction for this story.\n\
         Include your vision for:\n\
         - Visual style and tone\n\
         - Key themes to emphasize\n\
         - Emotional journey\n\
         - Cinematographic elements\n\
         - Pacing and rhythm\n\
         - Approximate scene count (considering length)\n\n\
         For a {length_minutes} minute film, we need approximately {scene_count} distinct scenes \
         to maintain proper pacing (roughly 30 seconds per scene on average).\n\n\
         Format your response in clear sections with headers.",
        scene_count = length_minutes * 2,
    )
}

pub(crate) fn creative_direction_user(story_idea: &str, length_minutes: u32) -> String {
    format!(
        "Story idea: {story_idea}\n\
         Desired length: {length_minutes} minutes\n\n\
         Provide detailed creative direction for this film."
    )
}

pub(crate) fn characters_system() -> &'static str {
    "You are a character writer for screenplays. Create detailed character profiles \
     that include:\n\
     - Name and basic demographics\n\
     - Physical description\n\
     - Personality traits and mannerisms\n\
     - Background and history\n\
     - Motivations and goals\n\
     - Key relationships\n\n\
     Format each character profile with clear headers and sections."
}

pub(crate) fn characters_user(story_idea: &str, creative_direction: &str) -> String {
    format!(
        "Based on this story idea and creative direction, develop the main characters:\n\n\
         Story Idea:\n{story_idea}\n\n\
         Creative Direction:\n{creative_direction}\n\n\
         Please provide detailed character profiles that will bring this story to life."
    )
}

pub(crate) fn plot_system() -> &'static str {
    "You are a plot writer for screenplays. Create engaging and well-structured plots \
     that include:\n\
     - A compelling synopsis\n\
     - Clear three-act structure\n\
     - Major plot points and turning points\n\
     - Character arcs and development\n\
     - Subplots and their integration\n\
     - Theme development\n\
     - Conflict escalation and resolution\n\n\
     Format your response with clear sections and ensure the plot fits within the \
     given time constraints."
}

pub(crate) fn plot_user(story_idea: &str, characters: &str, creative_direction: &str) -> String {
    format!(
        "Develop a detailed plot based on:\n\n\
         Story Idea:\n{story_idea}\n\n\
         Characters:\n{characters}\n\n\
         Creative Direction:\n{creative_direction}\n\n\
         Create a plot that effectively utilizes these characters and follows the \
         creative direction. Make sure each character's arc is meaningful and \
         contributes to the overall story."
    )
}

pub(crate) fn outline_system() -> &'static str {
    "You are a scene writer for screenplays. Break down the plot into detailed, vivid \
     scenes that include:\n\
     - Scene number and setting description\n\
     - Time of day and atmosphere\n\
     - Character presence and positioning\n\
     - Action descriptions\n\
     - Key dialogue points and emotional beats\n\
     - Visual elements and cinematography notes\n\
     - Scene transitions\n\n\
     Format each scene clearly with numbered sections and ensure smooth flow between \
     scenes. Focus on showing rather than telling, using vivid sensory details."
}

pub(crate) fn outline_user(plot: &str, characters: &str, creative_direction: &str) -> String {
    format!(
        "Break down this story into detailed scenes based on:\n\n\
         Plot:\n{plot}\n\n\
         Characters:\n{characters}\n\n\
         Creative Direction:\n{creative_direction}\n\n\
         Create a sequence of scenes that brings the story to life visually and \
         emotionally. Each scene should advance the plot while revealing character \
         and theme. Remember to vary the pacing and emotional intensity across scenes."
    )
}

pub(crate) fn scene_system() -> &'static str {
    "You are a professional screenwriter. Write a detailed scene that:\n\
     - Uses proper screenplay formatting\n\
     - Includes vivid action descriptions\n\
     - Features natural, character-driven dialogue\n\
     - Incorporates specific visual and atmospheric details\n\
     - Maintains consistent character voices\n\
     - Follows standard screenplay conventions\n\n\
     Format your scene with:\n\
     - Scene heading (INT/EXT, LOCATION, TIME)\n\
     - Action paragraphs (present tense, active voice)\n\
     - Character dialogue with parentheticals when needed\n\
     - Proper transitions\n\n\
     Make each scene substantial enough for proper timing (aim for 30-60 seconds of \
     screen time)."
}

pub(crate) fn scene_user(outline: &str, characters: &str, creative_direction: &str) -> String {
    format!(
        "Write a detailed scene based on this outline:\n\n\
         Scene Outline:\n{outline}\n\n\
         Characters:\n{characters}\n\n\
         Creative Direction:\n{creative_direction}\n\n\
         Write a substantial scene that brings this moment to life. Include detailed \
         action and meaningful dialogue. Remember this needs to fill 30-60 seconds of \
         screen time."
    )
}

pub(crate) fn gap_scene_system(remaining_seconds: u64) -> String {
    format!(
        "You are a professional screenwriter. Create a new scene that:\n\
         - Fits naturally within the existing plot\n\
         - Adds depth to characters or story\n\
         - Can fill approximately {} minutes of screen time\n\
         - Maintains the established tone and style\n\n\
         The scene should feel essential, not like filler content. Focus on character \
         development, subplot exploration, or theme reinforcement.",
        remaining_seconds / 60,
    )
}

pub(crate) fn gap_scene_user(
    plot: &str,
    characters: &str,
    creative_direction: &str,
    elapsed_seconds: u64,
    target_seconds: u64,
) -> String {
    format!(
        "Create a new scene that fits within this story:\n\n\
         Plot:\n{plot}\n\n\
         Characters:\n{characters}\n\n\
         Creative Direction:\n{creative_direction}\n\n\
         Current Runtime: {}:{:02}\n\
         Target Runtime: {}:{:02}\n\n\
         Write a substantial scene that adds value to the story while helping reach \
         the target length.",
        elapsed_seconds / 60,
        elapsed_seconds % 60,
        target_seconds / 60,
        target_seconds % 60,
    )
}

pub(crate) fn timing_system() -> &'static str {
    "You are a timing expert for screenplays. Analyze this scene and determine its \
     duration based on:\n\
     - Amount and complexity of dialogue\n\
     - Action sequence descriptions\n\
     - Scene transitions\n\
     - Establishing shots\n\
     - Character movements and interactions\n\n\
     Guidelines:\n\
     - Dialogue: ~3 seconds per line\n\
     - Action descriptions: ~5 seconds per line\n\
     - Establishing shots: ~10 seconds\n\
     - Complex action sequences: 5-10 seconds per beat\n\
     - Scene transitions: 5 seconds\n\n\
     Return ONLY the timestamp in MM:SS format."
}

pub(crate) fn timing_user(scene_text: &str) -> String {
    format!(
        "Analyze this scene and provide its duration:\n\n\
         Scene:\n{scene_text}\n\n\
         Consider all elements and provide a realistic duration that would properly \
         convey all action and dialogue. Remember that scenes typically run 30-60 \
         seconds. Return ONLY the timestamp (MM:SS)."
    )
}

pub(crate) fn image_prompt_system() -> &'static str {
    "You are a visual prompt expert for screenplays. Create detailed image prompts \
     that capture:\n\
     - Scene composition and framing\n\
     - Lighting and color palette\n\
     - Character positioning and expressions\n\
     - Key visual elements and props\n\
     - Atmosphere and mood\n\
     - Camera angles and movement\n\
     - Special effects or unique visual elements\n\n\
     Format each prompt with:\n\
     - Scene number\n\
     - Primary shot description\n\
     - Key visual elements\n\
     - Mood and atmosphere notes\n\
     - Technical considerations\n\n\
     Make each prompt detailed enough to create a clear mental image while being \
     concise and focused."
}

pub(crate) fn image_prompt_user(scene: &str) -> String {
    format!(
        "Create detailed visual prompts for these scenes:\n\n\
         Scenes:\n{scene}\n\n\
         For each scene, provide a prompt that would help visualize the key moment or \
         essence of the scene. Focus on the most cinematically impactful elements and \
         ensure visual continuity across scenes."
    )
}
