//! Context retrieval strategies
//!
//! Two interchangeable strategies behind one trait: a linear substring
//! scan over the FAQ collection, and a top-k nearest-neighbor lookup
//! over the embedding index. The strategy is one configuration axis of
//! the pipeline; the generation backend is the other.

pub mod substring;
pub mod vector;

pub use substring::SubstringRetriever;
pub use vector::VectorRetriever;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::store::FaqRecord;

/// One unit of retrieved supporting text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub text: String,
}

impl Passage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Format a FAQ record as a passage: `"Q: <question>\nA: <answer>"`
    pub fn from_faq(record: &FaqRecord) -> Self {
        Self {
            text: format!("Q: {}\nA: {}", record.question, record.answer),
        }
    }
}

/// Which retrieval strategy a pipeline uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalStrategy {
    /// Linear case-insensitive substring scan, all matches, corpus order
    Substring,
    /// Nearest-neighbor lookup, at most top-k passages, ascending distance
    Vector,
}

/// Turns a question into a bounded set of supporting passages
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passage_from_faq_format() {
        let record = FaqRecord {
            question: "How do I reset my password?".to_string(),
            answer: "Go to settings > security.".to_string(),
        };
        let passage = Passage::from_faq(&record);
        assert_eq!(
            passage.text,
            "Q: How do I reset my password?\nA: Go to settings > security."
        );
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&RetrievalStrategy::Substring).unwrap();
        assert_eq!(json, "\"substring\"");
        let parsed: RetrievalStrategy = serde_json::from_str("\"vector\"").unwrap();
        assert_eq!(parsed, RetrievalStrategy::Vector);
    }
}
