use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "New Deck".to_string()
}

fn default_fallback_deck() -> String {
    "Need Work".to_string()
}

fn default_model() -> String {
    "Basic (three reversed card)".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable Anki integration
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Deck for complete records
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Deck for records with unresolved sides
    #[serde(default = "default_fallback_deck")]
    pub fallback_deck: String,
    /// Note type with Front, Back and three fields
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            deck: default_deck(),
            fallback_deck: default_fallback_deck(),
            model: default_model(),
        }
    }
}

impl AnkiConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            enabled: crate::env_parse("ANKI_ENABLED").unwrap_or(defaults.enabled),
            url: crate::env_string("ANKI_URL").unwrap_or(defaults.url),
            deck: crate::env_string("ANKI_DECK").unwrap_or(defaults.deck),
            fallback_deck: crate::env_string("ANKI_FALLBACK_DECK")
                .unwrap_or(defaults.fallback_deck),
            model: crate::env_string("ANKI_MODEL").unwrap_or(defaults.model),
        }
    }
}
