use serde::{Deserialize, Serialize};

use super::Message;

/// JSON schema used for structured outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmJsonSchema {
    pub name: String,
    pub schema: serde_json::Value,
    #[serde(default)]
    pub strict: bool,
}

impl LlmJsonSchema {
    pub fn strict(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
            strict: true,
        }
    }
}

/// Output format requested from the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmResponseFormat {
    Text,
    JsonObject,
    JsonSchema { json_schema: LlmJsonSchema },
}

/// Parameters for LLM generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<LlmResponseFormat>,
}

impl LlmRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
            response_format: None,
        }
    }

    pub fn builder() -> LlmRequestBuilder {
        LlmRequestBuilder::new()
    }

    /// Whether the request asks for schema-constrained output
    pub fn is_structured(&self) -> bool {
        matches!(
            self.response_format,
            Some(LlmResponseFormat::JsonSchema { .. })
        )
    }
}

/// Builder for LlmRequest
#[derive(Debug, Default)]
pub struct LlmRequestBuilder {
    messages: Vec<Message>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    response_format: Option<LlmResponseFormat>,
}

impl LlmRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn system(self, content: impl Into<String>) -> Self {
        self.message(Message::system(content))
    }

    pub fn user(self, content: impl Into<String>) -> Self {
        self.message(Message::user(content))
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn maybe_temperature(mut self, temp: Option<f32>) -> Self {
        self.temperature = temp;
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn json_schema(mut self, schema: LlmJsonSchema) -> Self {
        self.response_format = Some(LlmResponseFormat::JsonSchema {
            json_schema: schema,
        });
        self
    }

    pub fn build(self) -> LlmRequest {
        LlmRequest {
            messages: self.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: self.response_format,
        }
    }
}
