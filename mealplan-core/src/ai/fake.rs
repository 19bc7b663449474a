//! Fake AI client for tests and offline dry runs.
//!
//! Responses are matched by checking whether any message in the request
//! contains a registered substring, so tests run without network access.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client returning canned responses.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    /// (substring, response) pairs, checked in insertion order.
    responses: Vec<(String, String)>,
    /// Returned if no substring matches.
    default_response: Option<String>,
    /// Every request seen, for assertions.
    requests: Mutex<Vec<(String, ChatRequest)>>,
}

impl FakeAiClient {
    /// Create a client with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client that answers requests mentioning `prompt_contains`.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().add_response(prompt_contains, response)
    }

    /// Add a response for requests containing a substring (case-insensitive).
    pub fn add_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    /// Set the response used when nothing matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Requests received so far as (prompt_name, request) pairs.
    pub fn requests(&self) -> Vec<(String, ChatRequest)> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let text = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((prompt_name.to_string(), request));

        let content = self
            .responses
            .iter()
            .find(|(pattern, _)| text.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                AiError::Api(format!(
                    "FakeAiClient: no response configured for prompt {}",
                    prompt_name
                ))
            })?;

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(text)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fake_client_matching() {
        let client = FakeAiClient::with_response("hello", "world");
        let result = client
            .complete("test", request("Say hello to the user"))
            .await
            .unwrap();
        assert_eq!(result.content, "world");
        assert!(!result.cached);
    }

    #[tokio::test]
    async fn test_fake_client_case_insensitive() {
        let client = FakeAiClient::with_response("HELLO", "world");
        let result = client.complete("test", request("hello there")).await.unwrap();
        assert_eq!(result.content, "world");
    }

    #[tokio::test]
    async fn test_fake_client_no_match() {
        let client = FakeAiClient::new();
        let result = client.complete("test", request("random prompt")).await;
        assert!(matches!(result, Err(AiError::Api(_))));
    }

    #[tokio::test]
    async fn test_fake_client_default_response() {
        let client = FakeAiClient::new().with_default_response("default");
        let result = client.complete("test", request("random")).await.unwrap();
        assert_eq!(result.content, "default");
    }

    #[tokio::test]
    async fn test_fake_client_records_requests() {
        let client = FakeAiClient::new().with_default_response("{}");
        client.complete("first", request("a")).await.unwrap();
        client.complete("second", request("b")).await.unwrap();

        let seen = client.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "first");
        assert_eq!(seen[1].1.messages[0].content, "b");
    }
}
