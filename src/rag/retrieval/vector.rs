//! Vector retrieval strategy
//!
//! Embeds the query with the same model the index was built with and
//! returns the k nearest stored chunks. No re-ranking, no score
//! thresholding: all k hits are passed on and the prompt instructs the
//! model to discount irrelevant ones.

use async_trait::async_trait;
use std::sync::Arc;

use crate::embedding::EmbeddingEngine;
use crate::errors::{AssistantError, Result};
use crate::rag::retrieval::{Passage, Retriever};
use crate::vector_db::FaqIndex;

/// Top-k nearest-neighbor lookup over the FAQ embedding index.
///
/// The index handle and embedding engine are shared process-wide; both
/// are immutable for the process lifetime.
pub struct VectorRetriever {
    index: Arc<FaqIndex>,
    engine: Arc<EmbeddingEngine>,
    top_k: usize,
}

impl VectorRetriever {
    pub fn new(index: Arc<FaqIndex>, engine: Arc<EmbeddingEngine>, top_k: usize) -> Self {
        Self {
            index,
            engine,
            top_k,
        }
    }
}

#[async_trait]
impl Retriever for VectorRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>> {
        let embedding = self
            .engine
            .embed(query)
            .map_err(|e| AssistantError::Retrieval(format!("query embedding failed: {:#}", e)))?;

        let chunks = self
            .index
            .search(&embedding, self.top_k)
            .await
            .map_err(|e| AssistantError::Retrieval(format!("vector index search failed: {:#}", e)))?;

        // Qdrant returns hits best-first, i.e. ascending distance
        Ok(chunks
            .into_iter()
            .map(|chunk| Passage::new(chunk.text))
            .collect())
    }
}
