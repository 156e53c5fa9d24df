
use std::collections::HashMap;
use std::sync::Mutex;

use crate::collector::{EntryLayout, ExtractionRule, PageCollector, ScrapedElement};

/// In-memory pages keyed by URL, recording every fetch
#[derive(Default)]
pub struct StaticCollector {
    pages: HashMap<String, Vec<ScrapedElement>>,
    requested: Mutex<Vec<String>>,
}

impl StaticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, elements: Vec<ScrapedElement>) -> Self {
        self.pages.insert(url.to_string(), elements);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageCollector for StaticCollector {
    async fn collect(&self, url: &str, rules: &[ExtractionRule]) -> Vec<Vec<ScrapedElement>> {
        self.requested.lock().unwrap().push(url.to_string());
        let elements = self.pages.get(url).cloned().unwrap_or_default();
        rules.iter().map(|_| elements.clone()).collect()
    }
}

fn entry(layout: &EntryLayout, word: &str, pos: &str, transcription: &str, definitions: &str) -> ScrapedElement {
    let children = [
        (&layout.headword, word),
        (&layout.part_of_speech, pos),
        (&layout.transcription, transcription),
        (&layout.definitions, definitions),
    ]
    .into_iter()
    .map(|(k, v)| (k.clone(), v.to_string()))
    .collect();

    ScrapedElement { children }
}

pub fn bilingual(word: &str, pos: &str, transcription: &str, definitions: &str) -> ScrapedElement {
    entry(&EntryLayout::bilingual(), word, pos, transcription, definitions)
}

pub fn gloss(word: &str, pos: &str, definitions: &str) -> ScrapedElement {
    entry(&EntryLayout::gloss(), word, pos, "", definitions)
}
