//! The seam between recipe generation and whichever model provider serves it.

use async_trait::async_trait;
use thiserror::Error;

use super::config::ConfigError;
use super::types::{ChatRequest, ChatResponse};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Generated recipe is invalid: {0}")]
    InvalidRecipe(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for AI clients.
///
/// Implementations own transport, authentication and retries. Callers only
/// build [`ChatRequest`]s and interpret the returned text.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// `prompt_name` identifies the prompt template for logging and caching.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;
}
