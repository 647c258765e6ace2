use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};
use trivia_core::model::QuestionRecord;

use super::{QuestionSource, decode_questions};
use crate::error::SourceError;

pub const DEFAULT_QUESTIONS_URL: &str =
    "https://raw.githubusercontent.com/itmmckernan/triviaJSON/master/world.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSourceConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUESTIONS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fetches the question list with a single GET.
#[derive(Clone, Debug)]
pub struct HttpQuestionSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpQuestionSource {
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(config: HttpSourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        let response = self.client.get(&self.config.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let questions = decode_questions(&body)?;
        info!(count = questions.len(), "fetched questions");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_world_questions() {
        let config = HttpSourceConfig::default();
        assert!(config.url.ends_with("world.json"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
