use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport("http", None, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::transport(
                "http",
                Some(status.as_u16()),
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::provider("http", format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, String>>,
        bodies: RwLock<Vec<serde_json::Value>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(url.into(), error.into());
            self
        }

        /// Request bodies received so far
        pub fn bodies(&self) -> Vec<serde_json::Value> {
            self.bodies.read().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn post_json(
            &self,
            url: &str,
            _headers: Vec<(&str, &str)>,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.bodies.write().unwrap().push(body.clone());

            if let Some(error) = self.errors.read().unwrap().get(url) {
                return Err(DomainError::provider("mock", error));
            }

            self.responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| DomainError::provider("mock", format!("No mock response for {}", url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn post_to(status: u16) -> Result<serde_json::Value, DomainError> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream said no"))
            .mount(&server)
            .await;

        let url = format!("{}/v1/chat/completions", server.uri());
        HttpClient::new()
            .post_json(&url, vec![], &serde_json::json!({}))
            .await
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_is_transient() {
        let error = post_to(503).await.unwrap_err();

        assert!(matches!(error, DomainError::Transport { status: Some(503), .. }));
        assert!(error.is_transient());
    }

    #[tokio::test]
    async fn test_client_error_is_not_transient() {
        let error = post_to(401).await.unwrap_err();

        assert!(matches!(error, DomainError::Transport { status: Some(401), .. }));
        assert!(!error.is_transient());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transient() {
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();

        let error = client
            .post_json("http://127.0.0.1:9/v1/embeddings", vec![], &serde_json::json!({}))
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::Transport { status: None, .. }));
        assert!(error.is_transient());
    }
}
