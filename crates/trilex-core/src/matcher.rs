use trilex_types::LookupResult;

/// First candidate whose part of speech contains `target`.
///
/// Scraped part-of-speech text carries qualifiers ("transitive verb"), so this
/// is a substring test. No match yields an empty result.
pub fn select(candidates: &[LookupResult], target: &str) -> LookupResult {
    candidates
        .iter()
        .find(|c| c.part_of_speech.contains(target))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(word: &str, pos: &str) -> LookupResult {
        LookupResult {
            word: word.to_string(),
            part_of_speech: pos.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_substring_match() {
        let candidates = vec![candidate("run", "noun"), candidate("run", "transitive verb")];

        let selected = select(&candidates, "verb");
        assert_eq!(selected.part_of_speech, "transitive verb");
    }

    #[test]
    fn test_no_match_is_empty() {
        let candidates = vec![candidate("run", "noun"), candidate("run", "transitive verb")];

        assert!(select(&candidates, "adjective").is_empty());
        assert!(select(&[], "noun").is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let candidates = vec![
            candidate("light", "adjective"),
            candidate("light", "noun"),
            candidate("lights", "noun"),
        ];

        assert_eq!(select(&candidates, "noun").word, "light");
    }
}
