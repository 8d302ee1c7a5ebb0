//! Retry with exponential backoff for outbound provider calls

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::http_client::HttpClientTrait;
use crate::domain::DomainError;

/// Backoff settings for transient provider failures
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first call
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    pub fn with_initial_delay(mut self, ms: u64) -> Self {
        self.initial_delay_ms = ms;
        self
    }

    pub fn with_max_delay(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    /// Delay before retry number `attempt` (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(attempt as i32);
        let delay_ms = delay.min(self.max_delay_ms as f64) as u64;

        Duration::from_millis(delay_ms)
    }
}

/// Wraps an HTTP client and retries transient failures
#[derive(Debug)]
pub struct RetryingHttpClient<C: HttpClientTrait> {
    inner: C,
    config: RetryConfig,
}

impl<C: HttpClientTrait> RetryingHttpClient<C> {
    pub fn new(inner: C, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl<C: HttpClientTrait> HttpClientTrait for RetryingHttpClient<C> {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut attempt = 0;

        loop {
            match self.inner.post_json(url, headers.clone(), body).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_transient() && attempt < self.config.max_retries => {
                    let delay = self.config.delay_for_attempt(attempt);
                    attempt += 1;

                    warn!(
                        url,
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        %error,
                        "Transient provider error, retrying"
                    );

                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
