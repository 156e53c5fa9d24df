use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::export::ExportConfig;

pub mod anki;
pub mod dictionary;
pub mod export;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub anki: AnkiConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Build config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            anki: AnkiConfig::new(),
            export: ExportConfig::new(),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.trim().parse().ok())
}
