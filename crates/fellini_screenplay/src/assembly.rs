//! Final document assembly.

use fellini_interface::SceneRecord;

/// Assemble the final screenplay document.
///
/// Pure string concatenation: a title line built from the first five words of
/// the story idea, the character section, the plot section, then each scene
/// in increasing index order with its timestamp and image prompt. Identical
/// inputs always produce a byte-identical document.
pub fn assemble(story_idea: &str, characters: &str, plot: &str, scenes: &[SceneRecord]) -> String {
    let title: Vec<&str> = story_idea.split_whitespace().take(5).collect();

    let mut document = format!(
        "Title: {}...\n\nCharacter Descriptions:\n{}\n\nPlot Description:\n{}\n",
        title.join(" "),
        characters,
        plot,
    );

    let mut ordered: Vec<&SceneRecord> = scenes.iter().collect();
    ordered.sort_by_key(|scene| scene.index);

    for scene in ordered {
        document.push_str(&format!(
            "\nScene {}: {}\nImage Prompt: {}\n{}\n",
            scene.index, scene.duration, scene.image_prompt, scene.script,
        ));
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use fellini_core::Timestamp;

    fn scene(index: usize) -> SceneRecord {
        SceneRecord {
            index,
            script: format!("scene text {index}"),
            duration: Timestamp::new(0, 45),
            image_prompt: format!("image {index}"),
        }
    }

    #[test]
    fn title_uses_first_five_words() {
        let document = assemble(
            "A lighthouse keeper discovers a message in a bottle",
            "chars",
            "plot",
            &[],
        );
        assert!(document.starts_with("Title: A lighthouse keeper discovers a...\n"));
    }

    #[test]
    fn scenes_render_in_index_order() {
        // Inserted out of order; output must still be 1, 2, 3
        let scenes = vec![scene(3), scene(1), scene(2)];
        let document = assemble("An idea", "chars", "plot", &scenes);

        let first = document.find("Scene 1: 00:45").unwrap();
        let second = document.find("Scene 2: 00:45").unwrap();
        let third = document.find("Scene 3: 00:45").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn assembly_is_deterministic() {
        let scenes = vec![scene(1), scene(2)];
        let a = assemble("An idea", "chars", "plot", &scenes);
        let b = assemble("An idea", "chars", "plot", &scenes);
        assert_eq!(a, b);
    }
}
