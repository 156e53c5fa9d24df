use std::collections::HashMap;

use trilex_types::LookupResult;

use crate::normalize;

/// Fetches one page and extracts the elements matching a set of rules
#[async_trait::async_trait]
pub trait PageCollector: Send + Sync {
    /// Fetch `url` once and return, per rule and in rule order, every matching
    /// element. A failed or timed out fetch yields empty lists.
    async fn collect(&self, url: &str, rules: &[ExtractionRule]) -> Vec<Vec<ScrapedElement>>;
}

/// A block selector plus the child selectors read from each matched block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    pub block: String,
    pub children: Vec<String>,
}

/// Text of the requested children of one matched block, keyed by selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedElement {
    pub children: HashMap<String, String>,
}

impl ScrapedElement {
    /// Raw text under `selector`, empty if the child was absent
    pub fn child(&self, selector: &str) -> &str {
        self.children.get(selector).map(String::as_str).unwrap_or("")
    }
}

/// Selectors describing one kind of dictionary entry
#[derive(Debug, Clone)]
pub struct EntryLayout {
    pub block: String,
    pub headword: String,
    pub part_of_speech: String,
    pub transcription: String,
    pub definitions: String,
    /// Header blob used when the individual fields are missing
    pub header: String,
}

impl EntryLayout {
    /// Entry on a bilingual (English/French) page
    pub fn bilingual() -> Self {
        Self {
            block: "span.link.dlink".to_string(),
            headword: "h2".to_string(),
            part_of_speech: "div.dpos-g.hdib".to_string(),
            transcription: "span.pron-info.dpron-info".to_string(),
            definitions: "div.def-body.ddef_b.ddef_b-t".to_string(),
            header: "div.di-head".to_string(),
        }
    }

    /// Entry on an English/Russian page
    pub fn gloss() -> Self {
        Self {
            block: "div.pr.entry-body__el".to_string(),
            headword: "span.hw.dhw".to_string(),
            part_of_speech: "span.pos.dpos".to_string(),
            transcription: "span.pron-info.dpron-info".to_string(),
            definitions: "div.def-body.ddef_b".to_string(),
            header: "div.pos-header.dpos-h".to_string(),
        }
    }

    pub fn rule(&self) -> ExtractionRule {
        ExtractionRule {
            block: self.block.clone(),
            children: vec![
                self.headword.clone(),
                self.part_of_speech.clone(),
                self.transcription.clone(),
                self.definitions.clone(),
                self.header.clone(),
            ],
        }
    }

    /// Turn a matched block into a candidate, reading the translation from
    /// definition line `line`
    pub fn candidate(&self, element: &ScrapedElement, line: usize) -> LookupResult {
        let (header_word, header_pos, header_transcription) =
            normalize::split_header(element.child(&self.header));

        let word = or_else(normalize::clean_field(element.child(&self.headword)), header_word);
        let part_of_speech = or_else(
            normalize::clean_field(element.child(&self.part_of_speech)),
            header_pos,
        );
        let transcription = or_else(
            normalize::clean_field(element.child(&self.transcription)),
            header_transcription,
        );

        let translation = normalize::line_at(element.child(&self.definitions), line);
        let translation = normalize::strip_infinitive(&part_of_speech, &translation);
        let (primary, additional_info) = normalize::split_senses(&translation);

        LookupResult {
            word,
            part_of_speech,
            transcription,
            translation: primary.trim().to_string(),
            additional_info,
        }
    }
}

fn or_else(value: String, fallback: String) -> String {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(pairs: &[(&str, &str)]) -> ScrapedElement {
        ScrapedElement {
            children: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_candidate_from_children() {
        let layout = EntryLayout::bilingual();
        let el = element(&[
            ("h2", " eat "),
            ("div.dpos-g.hdib", "verb"),
            ("span.pron-info.dpron-info", " /iːt/ "),
            ("div.def-body.ddef_b.ddef_b-t", "\nmanger / bouffer\n"),
        ]);

        let candidate = layout.candidate(&el, 1);
        assert_eq!(candidate.word, "eat");
        assert_eq!(candidate.part_of_speech, "verb");
        assert_eq!(candidate.transcription, "/iːt/");
        assert_eq!(candidate.translation, "manger");
        assert_eq!(candidate.additional_info, "manger / bouffer");
    }

    #[test]
    fn test_candidate_strips_infinitive() {
        let layout = EntryLayout::bilingual();
        let el = element(&[
            ("h2", "manger"),
            ("div.dpos-g.hdib", "transitive verb"),
            ("div.def-body.ddef_b.ddef_b-t", "\nto eat"),
        ]);

        assert_eq!(layout.candidate(&el, 1).translation, "eat");
    }

    #[test]
    fn test_candidate_falls_back_to_header() {
        let layout = EntryLayout::gloss();
        let el = element(&[
            ("div.pos-header.dpos-h", "cat\u{a0}noun\u{a0}/kæt/"),
            ("div.def-body.ddef_b", "\nsmall animal\nкошка"),
        ]);

        let candidate = layout.candidate(&el, 2);
        assert_eq!(candidate.word, "cat");
        assert_eq!(candidate.part_of_speech, "noun");
        assert_eq!(candidate.transcription, "/kæt/");
        assert_eq!(candidate.translation, "кошка");
    }

    #[test]
    fn test_candidate_header_with_blank_part_of_speech() {
        let layout = EntryLayout::gloss();
        let el = element(&[
            ("div.pos-header.dpos-h", "cat\u{a0}\u{a0}/kæt/"),
            ("div.def-body.ddef_b", "\nsmall animal\nкошка"),
        ]);

        let candidate = layout.candidate(&el, 2);
        assert_eq!(candidate.word, "cat");
        assert!(candidate.part_of_speech.is_empty());
        assert_eq!(candidate.transcription, "/kæt/");
    }

    #[test]
    fn test_candidate_missing_line_is_empty() {
        let layout = EntryLayout::gloss();
        let el = element(&[("span.hw.dhw", "cat"), ("div.def-body.ddef_b", "only line")]);

        let candidate = layout.candidate(&el, 2);
        assert_eq!(candidate.word, "cat");
        assert!(candidate.translation.is_empty());
    }
}
