use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use trilex_anki::AnkiConnectClient;
use trilex_config::anki::AnkiConfig;
use trilex_config::dictionary::DictionaryConfig;
use trilex_core::{EntryLayout, ExtractionRule, PageCollector, Resolver, ScrapedElement};
use trilex_io::Exporter;
use trilex_types::{Direction, Disposition, PartOfSpeech, WordQuery};

use crate::card::CardSink;
use crate::runner::{RunSummary, Runner};

const BASE: &str = "https://dict.test";

/// Serves the chat/cat pages and nothing else
struct CatPages {
    pages: HashMap<String, Vec<ScrapedElement>>,
}

impl CatPages {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            format!("{BASE}/french-english/chat"),
            vec![entry(&EntryLayout::bilingual(), "chat", "noun", "\ncat")],
        );
        pages.insert(
            format!("{BASE}/english-french/cat"),
            vec![entry(&EntryLayout::bilingual(), "cat", "noun", "\nchat [masculine]")],
        );
        pages.insert(
            format!("{BASE}/english-russian/cat"),
            vec![entry(&EntryLayout::gloss(), "cat", "noun", "\na small animal\nкошка")],
        );
        Self { pages }
    }
}

#[async_trait::async_trait]
impl PageCollector for CatPages {
    async fn collect(&self, url: &str, rules: &[ExtractionRule]) -> Vec<Vec<ScrapedElement>> {
        let elements = self.pages.get(url).cloned().unwrap_or_default();
        rules.iter().map(|_| elements.clone()).collect()
    }
}

fn entry(layout: &EntryLayout, word: &str, pos: &str, definitions: &str) -> ScrapedElement {
    let mut children = HashMap::new();
    children.insert(layout.headword.clone(), word.to_string());
    children.insert(layout.part_of_speech.clone(), pos.to_string());
    children.insert(layout.definitions.clone(), definitions.to_string());

    ScrapedElement { children }
}

fn resolver() -> Resolver<CatPages> {
    let config = DictionaryConfig {
        base_url: BASE.to_string(),
        ..Default::default()
    };
    Resolver::new(CatPages::new(), config)
}

fn words() -> Vec<WordQuery> {
    vec![
        WordQuery::new("chat", PartOfSpeech::Noun, Direction::FrenchEnglish),
        WordQuery::new("xyzzy", PartOfSpeech::Noun, Direction::EnglishFrench),
    ]
}

#[tokio::test]
async fn test_only_complete_records_are_exported() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("export");
    let runner = Runner::new(resolver(), None, Some(Exporter::new(&dir)));

    let summary = runner.run(&words(), &CancellationToken::new()).await;

    assert_eq!(
        summary,
        RunSummary {
            processed: 2,
            complete: 1,
            needs_work: 1,
            exported: 1,
            cards_added: 0,
        }
    );
    assert!(dir.join("cat.csv").exists());
    assert!(dir.join("cat.json").exists());
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
}

#[tokio::test]
async fn test_anki_failure_does_not_stop_the_run() {
    let config = AnkiConfig {
        url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    let cards = CardSink::new(AnkiConnectClient::new(config.url.clone()), &config);
    let runner = Runner::new(resolver(), Some(cards), None);

    let summary = runner.run(&words(), &CancellationToken::new()).await;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.cards_added, 0);
}

#[tokio::test]
async fn test_cancelled_run_stops_between_words() {
    let runner = Runner::new(resolver(), None, None);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let summary = runner.run(&words(), &cancel).await;

    assert_eq!(summary, RunSummary::default());
}

#[test]
fn test_routing() {
    let config = AnkiConfig::default();
    let cards = CardSink::new(AnkiConnectClient::new(config.url.clone()), &config);

    assert_eq!(cards.deck_for(Disposition::Complete), "New Deck");
    assert_eq!(cards.deck_for(Disposition::NeedsWork), "Need Work");
}
