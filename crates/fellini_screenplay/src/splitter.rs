//! Scene outline splitting.

/// Split an outline blob into individual scene descriptions.
///
/// This is a documented heuristic contract, not a grammar: the literal token
/// `"Scene"` delimits scenes, fragments are trimmed, and empty fragments are
/// discarded. Order is preserved as produced by the split; fragment indices
/// are not aligned with any "Scene N" label inside the text.
///
/// If the token never occurs, the result is the whole trimmed blob as a
/// single element (or nothing when the blob is blank). This is the most
/// fragile coupling to the upstream model's output conventions, which is why
/// it lives behind a named function instead of inline in the pacing loop.
///
/// # Examples
///
/// ```
/// use fellini_screenplay::split_scenes;
///
/// let scenes = split_scenes("Scene 1: The shore Scene 2: The light");
/// assert_eq!(scenes, vec!["1: The shore", "2: The light"]);
/// ```
pub fn split_scenes(outline: &str) -> Vec<String> {
    outline
        .split("Scene")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_literal_token() {
        let scenes = split_scenes("Scene 1: A Scene 2: B");
        assert_eq!(scenes, vec!["1: A", "2: B"]);
    }

    #[test]
    fn keeps_nonempty_leading_fragment() {
        let scenes = split_scenes("intro Scene 1: A Scene 2: B");
        assert_eq!(scenes, vec!["intro", "1: A", "2: B"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_scenes("").is_empty());
        assert!(split_scenes("   \n  ").is_empty());
    }

    #[test]
    fn missing_token_yields_whole_blob() {
        let scenes = split_scenes("  a single act with no markers  ");
        assert_eq!(scenes, vec!["a single act with no markers"]);
    }

    #[test]
    fn splitting_is_stable() {
        let blob = "Scene 1: A\nScene 2: B\nScene 3: C";
        assert_eq!(split_scenes(blob), split_scenes(blob));
    }
}
