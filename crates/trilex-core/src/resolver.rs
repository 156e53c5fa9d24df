use trilex_config::dictionary::DictionaryConfig;
use trilex_types::{Direction, Language, LookupResult, TrilingualRecord, WordQuery};

use crate::collector::{EntryLayout, PageCollector};
use crate::{matcher, normalize, record};

/// Drives the three dependent lookups that turn a word into a trilingual record
pub struct Resolver<C> {
    collector: C,
    config: DictionaryConfig,
    bilingual: EntryLayout,
    gloss: EntryLayout,
}

impl<C: PageCollector> Resolver<C> {
    pub fn new(collector: C, config: DictionaryConfig) -> Self {
        Self::with_layouts(collector, config, EntryLayout::bilingual(), EntryLayout::gloss())
    }

    pub fn with_layouts(
        collector: C,
        config: DictionaryConfig,
        bilingual: EntryLayout,
        gloss: EntryLayout,
    ) -> Self {
        Self {
            collector,
            config,
            bilingual,
            gloss,
        }
    }

    #[cfg(test)]
    pub(crate) fn collector(&self) -> &C {
        &self.collector
    }

    /// `<base>/<source>-<target>/<word>`
    pub fn page_url(&self, direction: Direction, word: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            direction.slug(),
            urlencoding::encode(word)
        )
    }

    /// Resolve one word. Never fails: unresolved sides stay empty.
    pub async fn resolve(&self, query: &WordQuery) -> TrilingualRecord {
        let a = self.stage_a(query).await;
        let b = self.stage_b(query, &a).await;
        let c = self.stage_c(query, &a, &b).await;

        record::assemble(query.direction, a, b, c)
    }

    /// Look the word up in its own direction
    pub async fn stage_a(&self, query: &WordQuery) -> LookupResult {
        let candidates = self.candidates(query.direction, &query.text).await;
        let selected = matcher::select(&candidates, query.part_of_speech.as_str());

        if selected.is_empty() && query.direction.is_gloss() {
            tracing::debug!("No gloss entry for '{}', passing query through", query.text);
            return LookupResult {
                word: query.text.clone(),
                part_of_speech: query.part_of_speech.as_str().to_string(),
                ..Default::default()
            };
        }

        selected
    }

    /// Look the other side of the English/French pair up, keyed by stage A
    pub async fn stage_b(&self, query: &WordQuery, a: &LookupResult) -> LookupResult {
        let pos = query.part_of_speech.as_str();

        match query.direction {
            Direction::EnglishFrench | Direction::FrenchEnglish => {
                let key = normalize::lookup_key(&a.translation);
                let direction = reversed(query.direction);
                let candidates = self.candidates(direction, &key).await;
                matcher::select(&candidates, pos)
            }
            Direction::EnglishRussian => {
                // Stage A answered in Russian, so the French side comes from
                // the English headword's own bilingual entry
                let key = normalize::strip_particle(&a.word);
                let candidates = self.candidates(Direction::EnglishFrench, &key).await;
                french_side(matcher::select(&candidates, pos))
            }
        }
    }

    /// Fetch the Russian gloss of the English side.
    ///
    /// In the `en-ru` direction stage A already read the gloss page, so its
    /// entry is reused instead of fetched again. A pass-through stage A
    /// carries no gloss and yields an empty side.
    pub async fn stage_c(
        &self,
        query: &WordQuery,
        a: &LookupResult,
        b: &LookupResult,
    ) -> LookupResult {
        if query.direction.is_gloss() {
            if a.translation.is_empty() {
                return LookupResult::default();
            }

            return LookupResult {
                word: a.word.clone(),
                translation: a.translation.clone(),
                ..Default::default()
            };
        }

        let english = match query.direction.source() {
            Language::English => &a.word,
            _ => &b.word,
        };
        let key = normalize::strip_particle(english);

        let candidates = self.candidates(Direction::EnglishRussian, &key).await;
        let selected = matcher::select(&candidates, query.part_of_speech.as_str());

        LookupResult {
            word: selected.word,
            translation: selected.translation,
            ..Default::default()
        }
    }

    /// Fetch one page and turn every entry on it into a candidate
    async fn candidates(&self, direction: Direction, word: &str) -> Vec<LookupResult> {
        let word = word.trim();
        if word.is_empty() {
            tracing::debug!("Skipping {} lookup with empty key", direction);
            return Vec::new();
        }

        let layout = if direction.is_gloss() {
            &self.gloss
        } else {
            &self.bilingual
        };
        let line = self.config.line_for(direction.is_gloss());
        let url = self.page_url(direction, word);

        let elements = self
            .collector
            .collect(&url, &[layout.rule()])
            .await
            .into_iter()
            .next()
            .unwrap_or_default();

        let candidates: Vec<LookupResult> = elements
            .iter()
            .map(|element| layout.candidate(element, line))
            .collect();

        tracing::debug!("{}: {} candidates", url, candidates.len());
        candidates
    }
}

fn reversed(direction: Direction) -> Direction {
    match direction {
        Direction::EnglishFrench => Direction::FrenchEnglish,
        Direction::FrenchEnglish => Direction::EnglishFrench,
        Direction::EnglishRussian => Direction::EnglishFrench,
    }
}

/// French side built from an English entry's translation
fn french_side(english: LookupResult) -> LookupResult {
    let word = normalize::lookup_key(&english.translation);
    if word.is_empty() {
        return LookupResult::default();
    }

    LookupResult {
        word,
        part_of_speech: english.part_of_speech,
        transcription: String::new(),
        translation: english.word,
        additional_info: english.additional_info,
    }
}
