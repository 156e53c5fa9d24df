mod client;
mod template;

pub use client::AnkiConnectClient;
pub use template::{CardTemplate, NoteField};

use anyhow::Result;
use trilex_types::TrilingualRecord;

/// Add a record to `deck` as one note
pub async fn add_card(
    client: &AnkiConnectClient,
    template: &CardTemplate,
    deck: &str,
    record: &TrilingualRecord,
) -> Result<u64> {
    let fields = template.fields(record);

    client.add_note(deck, &template.model, &fields).await
}

/// Create any of `decks` that Anki does not have yet
pub async fn ensure_decks(client: &AnkiConnectClient, decks: &[&str]) -> Result<()> {
    let existing = client.deck_names().await?;

    for deck in decks {
        if !existing.iter().any(|d| d == deck) {
            client.create_deck(deck).await?;
            tracing::info!("Created Anki deck '{}'", deck);
        }
    }

    Ok(())
}
