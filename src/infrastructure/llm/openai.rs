use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::{
    DomainError, FinishReason, LlmProvider, LlmRequest, LlmResponse, LlmResponseFormat, Message,
    MessageRole, Usage,
};

pub(crate) const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// OpenAI-compatible chat completions provider
#[derive(Debug)]
pub struct OpenAiProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let auth_header = format!("Bearer {}", api_key.into());
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header,
            base_url,
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, model: &str, request: &LlmRequest) -> serde_json::Value {
        let messages: Vec<OpenAiMessage> = request
            .messages
            .iter()
            .map(OpenAiMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if let Some(ref response_format) = request.response_format {
            body["response_format"] = match response_format {
                LlmResponseFormat::Text => serde_json::json!({"type": "text"}),
                LlmResponseFormat::JsonObject => serde_json::json!({"type": "json_object"}),
                LlmResponseFormat::JsonSchema { json_schema } => serde_json::json!({
                    "type": "json_schema",
                    "json_schema": {
                        "name": json_schema.name,
                        "strict": json_schema.strict,
                        "schema": json_schema.schema
                    }
                }),
            };
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: OpenAiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("openai", "No choices in response"))?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        let mut llm_response = LlmResponse::new(response.id, response.model, message);

        if let Some(reason) = choice.finish_reason {
            llm_response = llm_response.with_finish_reason(FinishReason::parse(&reason));
        }

        if let Some(usage) = response.usage {
            llm_response =
                llm_response.with_usage(Usage::new(usage.prompt_tokens, usage.completion_tokens));
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for OpenAiProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(model, &request);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

impl OpenAiMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role,
            content: message.content_text().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    id: String,
    model: String,
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LlmJsonSchema;
    use crate::infrastructure::llm::MockHttpClient;

    const TEST_URL: &str = "https://api.openai.com/v1/chat/completions";

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18 }
        })
    }

    #[tokio::test]
    async fn test_openai_chat() {
        let client = MockHttpClient::new().with_response(TEST_URL, completion("Sow in April."));
        let provider = OpenAiProvider::new(client, "test-api-key");

        let request = LlmRequest::builder().user("When to sow oats?").build();
        let response = provider.chat("gpt-4o-mini", request).await.unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.content(), "Sow in April.");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));

        let usage = response.usage.unwrap();
        assert_eq!(usage.total_tokens, 18);
    }

    #[tokio::test]
    async fn test_openai_sends_json_schema_format() {
        let client = MockHttpClient::new().with_response(TEST_URL, completion("{\"step\":\"RAG\"}"));
        let provider = OpenAiProvider::new(client, "test-api-key");

        let request = LlmRequest::builder()
            .system("route")
            .user("rice blast?")
            .temperature(0.0)
            .json_schema(LlmJsonSchema::strict(
                "route",
                serde_json::json!({"type": "object"}),
            ))
            .build();
        provider.chat("gpt-4o-mini", request).await.unwrap();

        let body = &provider.client.bodies()[0];
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "route");
        assert_eq!(body["response_format"]["json_schema"]["strict"], true);
    }

    #[tokio::test]
    async fn test_openai_error_handling() {
        let client = MockHttpClient::new().with_error(TEST_URL, "API key invalid");
        let provider = OpenAiProvider::new(client, "invalid-key");

        let request = LlmRequest::builder().user("Hello!").build();
        let result = provider.chat("gpt-4o-mini", request).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_openai_no_choices() {
        let client = MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({"id": "x", "model": "m", "choices": []}),
        );
        let provider = OpenAiProvider::new(client, "key");

        let result = provider
            .chat("m", LlmRequest::builder().user("hi").build())
            .await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_openai_custom_base_url() {
        let custom_url = "http://localhost:8080/v1/chat/completions";
        let client = MockHttpClient::new().with_response(custom_url, completion("ok"));
        let provider = OpenAiProvider::with_base_url(client, "test-key", "http://localhost:8080/");

        let response = provider
            .chat("gpt-4o-mini", LlmRequest::builder().user("Test").build())
            .await
            .unwrap();

        assert_eq!(response.content(), "ok");
    }
}
