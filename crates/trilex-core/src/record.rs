use trilex_types::{Direction, Disposition, Language, LookupResult, TrilingualRecord};

/// Orient stage outputs so `source` is the English side and `target` the French side.
///
/// Stage A always answers in the query's source language and stage B in the
/// other pair language, so the two swap when the query started from French.
pub fn assemble(
    direction: Direction,
    stage_a: LookupResult,
    stage_b: LookupResult,
    stage_c: LookupResult,
) -> TrilingualRecord {
    let (source, target) = match direction.source() {
        Language::French => (stage_b, stage_a),
        _ => (stage_a, stage_b),
    };

    TrilingualRecord {
        source,
        target,
        gloss: stage_c,
    }
}

pub fn classify(record: &TrilingualRecord) -> Disposition {
    if record.is_complete() {
        Disposition::Complete
    } else {
        Disposition::NeedsWork
    }
}

/// Deck a record is routed to
pub fn route<'a>(disposition: Disposition, deck: &'a str, fallback_deck: &'a str) -> &'a str {
    match disposition {
        Disposition::Complete => deck,
        Disposition::NeedsWork => fallback_deck,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> LookupResult {
        LookupResult {
            word: w.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_french_source_is_swapped() {
        let record = assemble(
            Direction::FrenchEnglish,
            word("manger"),
            word("eat"),
            word("есть"),
        );

        assert_eq!(record.source.word, "eat");
        assert_eq!(record.target.word, "manger");
        assert_eq!(record.gloss.word, "есть");
    }

    #[test]
    fn test_english_source_is_kept() {
        let record = assemble(
            Direction::EnglishFrench,
            word("eat"),
            word("manger"),
            word("есть"),
        );

        assert_eq!(record.source.word, "eat");
        assert_eq!(record.target.word, "manger");
    }

    #[test]
    fn test_classify() {
        let complete = assemble(Direction::EnglishFrench, word("eat"), word("manger"), word("есть"));
        assert_eq!(classify(&complete), Disposition::Complete);

        let partial = assemble(Direction::EnglishFrench, word("eat"), word("  "), word("есть"));
        assert_eq!(classify(&partial), Disposition::NeedsWork);

        let empty = TrilingualRecord::default();
        assert_eq!(classify(&empty), Disposition::NeedsWork);
    }

    #[test]
    fn test_route() {
        assert_eq!(route(Disposition::Complete, "New Deck", "Need Work"), "New Deck");
        assert_eq!(route(Disposition::NeedsWork, "New Deck", "Need Work"), "Need Work");
    }
}
