use tokio_util::sync::CancellationToken;
use trilex_core::{PageCollector, Resolver, record};
use trilex_io::Exporter;
use trilex_types::{Disposition, WordQuery};

use crate::card::CardSink;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub complete: usize,
    pub needs_work: usize,
    pub exported: usize,
    pub cards_added: usize,
}

/// Resolves words one at a time and hands each record to its destinations
pub struct Runner<C> {
    resolver: Resolver<C>,
    cards: Option<CardSink>,
    exporter: Option<Exporter>,
}

impl<C: PageCollector> Runner<C> {
    pub fn new(resolver: Resolver<C>, cards: Option<CardSink>, exporter: Option<Exporter>) -> Self {
        Self {
            resolver,
            cards,
            exporter,
        }
    }

    /// Process `words` in order. Cancellation is honoured between words only.
    pub async fn run(&self, words: &[WordQuery], cancel: &CancellationToken) -> RunSummary {
        let mut summary = RunSummary::default();

        for query in words {
            if cancel.is_cancelled() {
                tracing::warn!(
                    "Cancelled with {} of {} words left",
                    words.len() - summary.processed,
                    words.len()
                );
                break;
            }

            self.process(query, &mut summary).await;
        }

        summary
    }

    async fn process(&self, query: &WordQuery, summary: &mut RunSummary) {
        let record = self.resolver.resolve(query).await;
        let disposition = record::classify(&record);
        summary.processed += 1;

        match disposition {
            Disposition::Complete => {
                summary.complete += 1;
                tracing::info!(
                    "{}: {} / {} / {}",
                    query,
                    record.source.word,
                    record.target.word,
                    record.gloss.translation
                );
            }
            Disposition::NeedsWork => {
                summary.needs_work += 1;
                tracing::warn!(
                    "{}: incomplete, missing {}",
                    query,
                    record.missing_sides().join(", ")
                );
            }
        }

        // Incomplete records go to the fallback deck only, never to files
        if let Some(exporter) = &self.exporter
            && disposition == Disposition::Complete
        {
            match exporter.export(&record) {
                Ok(files) => {
                    summary.exported += 1;
                    tracing::debug!("{}: wrote {}", query, files.json.display());
                }
                Err(e) => tracing::error!("{}: export failed: {}", query, e),
            }
        }

        if let Some(cards) = &self.cards {
            match cards.add(&record, disposition).await {
                Ok(note_id) => {
                    summary.cards_added += 1;
                    tracing::info!(
                        "{}: added to '{}' (note_id={})",
                        query,
                        cards.deck_for(disposition),
                        note_id
                    );
                }
                Err(e) => tracing::error!("{}: failed to add card to Anki: {:#}", query, e),
            }
        }
    }
}
