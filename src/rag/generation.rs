//! Answer generation backends
//!
//! Two invocation shapes with one semantic contract: answer from the
//! supplied context, or state that the context does not contain an
//! answer. Variant A sends the whole composed instruction as a single
//! completion prompt; variant B splits it into a system instruction
//! plus the bare question as the human message. Backend errors
//! propagate uncaught to the orchestrator boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::{ChatMessage, OllamaClient};
use crate::rag::context::PromptComposer;
use crate::rag::retrieval::Passage;

/// Which generation backend a pipeline uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationBackend {
    /// Single-prompt completion (variant A)
    Completion,
    /// System/human message pair (variant B)
    Chat,
}

/// Produces an answer conditioned on the retrieved passages
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, question: &str, passages: &[Passage]) -> Result<String>;
}

/// Variant A: one opaque instruction through POST /api/generate
pub struct CompletionGenerator {
    client: Arc<OllamaClient>,
    model: String,
    composer: PromptComposer,
}

impl CompletionGenerator {
    pub fn new(client: Arc<OllamaClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            composer: PromptComposer::new(),
        }
    }
}

#[async_trait]
impl Generator for CompletionGenerator {
    async fn generate(&self, question: &str, passages: &[Passage]) -> Result<String> {
        let prompt = self.composer.compose(question, passages);
        self.client.complete(&self.model, &prompt).await
    }
}

/// Variant B: system instruction plus bare question through POST /api/chat
pub struct ChatGenerator {
    client: Arc<OllamaClient>,
    model: String,
    composer: PromptComposer,
}

impl ChatGenerator {
    pub fn new(client: Arc<OllamaClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            composer: PromptComposer::new(),
        }
    }

    fn build_messages(&self, question: &str, passages: &[Passage]) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.composer.system_prompt(passages)),
            ChatMessage::user(question),
        ]
    }
}

#[async_trait]
impl Generator for ChatGenerator {
    async fn generate(&self, question: &str, passages: &[Passage]) -> Result<String> {
        let messages = self.build_messages(question, passages);
        self.client.chat(&self.model, messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::context::NO_DATA_SENTINEL;
    use std::time::Duration;

    fn test_client() -> Arc<OllamaClient> {
        Arc::new(OllamaClient::new("http://127.0.0.1:11434", Duration::from_secs(5)).unwrap())
    }

    #[test]
    fn test_chat_messages_split_context_and_question() {
        let generator = ChatGenerator::new(test_client(), "qwen2.5:7b-instruct");
        let passages = vec![Passage::new("Q: a\nA: b")];
        let messages = generator.build_messages("where is a?", &passages);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Q: a\nA: b"));
        assert!(!messages[0].content.contains("where is a?"));
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "where is a?");
    }

    #[test]
    fn test_chat_messages_use_sentinel_for_empty_context() {
        let generator = ChatGenerator::new(test_client(), "qwen2.5:7b-instruct");
        let messages = generator.build_messages("anything", &[]);

        assert!(messages[0].content.contains(NO_DATA_SENTINEL));
    }
}
