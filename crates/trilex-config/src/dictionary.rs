use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://dictionary.cambridge.org/dictionary".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/125.0.0.0 Safari/537.36"
        .to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_bilingual_line() -> usize {
    1
}

fn default_gloss_line() -> usize {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Pages are fetched from `<base_url>/<source>-<target>/<word>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-fetch timeout. An expired fetch counts as an empty page.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Line of a bilingual definition blob holding the translation
    #[serde(default = "default_bilingual_line")]
    pub bilingual_line: usize,
    /// Line of a gloss definition blob holding the Russian translation
    #[serde(default = "default_gloss_line")]
    pub gloss_line: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            bilingual_line: default_bilingual_line(),
            gloss_line: default_gloss_line(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            base_url: crate::env_string("DICTIONARY_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: crate::env_string("DICTIONARY_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_seconds: crate::env_parse("DICTIONARY_TIMEOUT_SECONDS")
                .unwrap_or(defaults.timeout_seconds),
            bilingual_line: crate::env_parse("DICTIONARY_BILINGUAL_LINE")
                .unwrap_or(defaults.bilingual_line),
            gloss_line: crate::env_parse("DICTIONARY_GLOSS_LINE").unwrap_or(defaults.gloss_line),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Definition line index for a page
    pub fn line_for(&self, gloss: bool) -> usize {
        if gloss {
            self.gloss_line
        } else {
            self.bilingual_line
        }
    }
}
