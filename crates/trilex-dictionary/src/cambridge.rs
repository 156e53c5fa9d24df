use trilex_config::dictionary::DictionaryConfig;
use trilex_core::{ExtractionRule, PageCollector, ScrapedElement};

use crate::extract::extract;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Timed out fetching {0}")]
    Timeout(String),

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Page collector for dictionary.cambridge.org
#[derive(Clone)]
pub struct CambridgeCollector {
    client: reqwest::Client,
}

impl CambridgeCollector {
    pub fn new(config: &DictionaryConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page body, single attempt
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::NetworkError(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl PageCollector for CambridgeCollector {
    async fn collect(&self, url: &str, rules: &[ExtractionRule]) -> Vec<Vec<ScrapedElement>> {
        match self.fetch(url).await {
            Ok(html) => extract(&html, rules),
            Err(e) => {
                tracing::warn!("Fetch failed, treating page as empty: {}", e);
                vec![Vec::new(); rules.len()]
            }
        }
    }
}
