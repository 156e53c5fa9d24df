use trilex_anki::{AnkiConnectClient, CardTemplate};
use trilex_config::anki::AnkiConfig;
use trilex_core::record;
use trilex_types::{Disposition, TrilingualRecord};

/// AnkiConnect client plus the decks records are routed to
pub struct CardSink {
    client: AnkiConnectClient,
    template: CardTemplate,
    deck: String,
    fallback_deck: String,
}

impl CardSink {
    pub fn new(client: AnkiConnectClient, config: &AnkiConfig) -> Self {
        Self {
            client,
            template: CardTemplate::default_trilingual(config.model.clone()),
            deck: config.deck.clone(),
            fallback_deck: config.fallback_deck.clone(),
        }
    }

    pub fn deck_for(&self, disposition: Disposition) -> &str {
        record::route(disposition, &self.deck, &self.fallback_deck)
    }

    pub async fn add(
        &self,
        record: &TrilingualRecord,
        disposition: Disposition,
    ) -> anyhow::Result<u64> {
        trilex_anki::add_card(&self.client, &self.template, self.deck_for(disposition), record)
            .await
    }
}

/// Connect to AnkiConnect, or `None` when disabled or unreachable
pub async fn connect(config: &AnkiConfig) -> Option<CardSink> {
    if !config.enabled {
        tracing::warn!("Anki integration disabled");
        return None;
    }

    let client = AnkiConnectClient::new(config.url.clone());

    match client.check_connection().await {
        Ok(version) => tracing::info!("Connected to AnkiConnect v{} at {}", version, config.url),
        Err(e) => {
            tracing::error!("AnkiConnect unavailable at {}, cards disabled: {:#}", config.url, e);
            return None;
        }
    }

    match client.model_names().await {
        Ok(models) if !models.contains(&config.model) => {
            tracing::warn!("Anki has no note type '{}', adding cards will fail", config.model);
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Failed to list Anki note types: {:#}", e),
    }

    let decks = [config.deck.as_str(), config.fallback_deck.as_str()];
    if let Err(e) = trilex_anki::ensure_decks(&client, &decks).await {
        tracing::warn!("Failed to prepare Anki decks: {:#}", e);
    }

    Some(CardSink::new(client, config))
}
