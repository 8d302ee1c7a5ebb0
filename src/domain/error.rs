use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Index file '{path}' could not be read: {message}")]
    MissingIndexFile { path: String, message: String },

    #[error("Index file '{path}' is malformed: {message}")]
    IndexFormat { path: String, message: String },

    #[error("Index integrity error: {message}")]
    IndexIntegrity { message: String },

    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    InvalidEmbeddingDimension { expected: usize, actual: usize },

    #[error("Router returned an unclassified route: '{label}'")]
    UnclassifiedRoute { label: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    /// The request never produced a usable HTTP response; `status` is `None`
    /// when no response arrived at all
    #[error("Transport error: {provider} - {message}")]
    Transport {
        provider: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn missing_index_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingIndexFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn index_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::IndexFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn index_integrity(message: impl Into<String>) -> Self {
        Self::IndexIntegrity {
            message: message.into(),
        }
    }

    pub fn invalid_embedding_dimension(expected: usize, actual: usize) -> Self {
        Self::InvalidEmbeddingDimension { expected, actual }
    }

    pub fn unclassified_route(label: impl Into<String>) -> Self {
        Self::UnclassifiedRoute {
            label: label.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn transport(
        provider: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Transport {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether retrying the failed call could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { status, .. } => match status {
                None => true,
                Some(code) => *code == 429 || (500..600).contains(code),
            },
            _ => false,
        }
    }
}
