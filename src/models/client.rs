//! Ollama API client for answer generation
//!
//! Provides the two invocation shapes the generators use:
//! - `complete`: POST /api/generate with one opaque prompt
//! - `chat`: POST /api/chat with a role-tagged message list
//!
//! Both are synchronous single-attempt round-trips; no retry, no
//! streaming. Backend errors propagate to the caller untouched.

use crate::errors::{AssistantError, Result};
use crate::models::types::{
    ChatMessage, ChatRequest, ChatResponse, GenerateRequest, GenerateResponse,
};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for an Ollama-compatible model server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AssistantError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Single-shot completion: the full instruction goes in one prompt,
    /// the full response text comes back verbatim
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Generation(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Generation(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Generation(format!("Failed to parse response: {}", e)))?;

        Ok(body.response)
    }

    /// Message-pair exchange: role-tagged messages in, the assistant
    /// message content back verbatim
    pub async fn chat(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        let request = ChatRequest {
            model: model.to_string(),
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Generation(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Generation(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Generation(format!("Failed to parse response: {}", e)))?;

        Ok(body.message.content)
    }

    /// Check if the model server is reachable
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/version", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    /// Base URL of the model server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = OllamaClient::new("http://127.0.0.1:11434/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:11434");
    }

    #[tokio::test]
    #[ignore] // Integration test - requires a running Ollama server
    async fn test_complete_round_trip() {
        let client = OllamaClient::new("http://127.0.0.1:11434", Duration::from_secs(120)).unwrap();
        let answer = client
            .complete("qwen2.5:7b-instruct", "Reply with the single word: pong")
            .await
            .unwrap();
        assert!(!answer.is_empty());
    }

    #[tokio::test]
    #[ignore] // Integration test - requires a running Ollama server
    async fn test_chat_round_trip() {
        let client = OllamaClient::new("http://127.0.0.1:11434", Duration::from_secs(120)).unwrap();
        let messages = vec![
            ChatMessage::system("You answer with one word."),
            ChatMessage::user("Say pong."),
        ];
        let answer = client.chat("qwen2.5:7b-instruct", messages).await.unwrap();
        assert!(!answer.is_empty());
    }
}
