//! RAG orchestrator
//!
//! Composes retriever → composer → generator into one request/response
//! cycle. Retrieval strategy and generation backend are independent
//! configuration axes; any strategy pairs with any backend. Retrieval
//! and generation errors pass through untouched; an empty passage set
//! is a valid input, not an error.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::embedding::EmbeddingEngine;
use crate::errors::Result;
use crate::models::OllamaClient;
use crate::rag::generation::{
    ChatGenerator, CompletionGenerator, GenerationBackend, Generator,
};
use crate::rag::retrieval::{
    Retriever, RetrievalStrategy, SubstringRetriever, VectorRetriever,
};
use crate::store::DocumentStore;
use crate::vector_db::FaqIndex;

/// Shared collaborators the pipeline variants are assembled from.
///
/// Everything here is created once at startup and shared process-wide;
/// in particular the index handle and embedding engine are not
/// re-opened per request.
#[derive(Clone)]
pub struct PipelineDeps {
    pub store: Arc<RwLock<DocumentStore>>,
    pub faqs_collection: String,
    pub index: Arc<FaqIndex>,
    pub engine: Arc<EmbeddingEngine>,
    pub llm: Arc<OllamaClient>,
    pub completion_model: String,
    pub chat_model: String,
    pub top_k: usize,
}

/// One retrieve-then-generate pipeline
pub struct RagPipeline {
    retriever: Box<dyn Retriever>,
    generator: Box<dyn Generator>,
}

impl RagPipeline {
    /// Compose a pipeline from explicit parts
    pub fn new(retriever: Box<dyn Retriever>, generator: Box<dyn Generator>) -> Self {
        Self {
            retriever,
            generator,
        }
    }

    /// Compose a pipeline from the two configuration axes
    pub fn from_selectors(
        strategy: RetrievalStrategy,
        backend: GenerationBackend,
        deps: &PipelineDeps,
    ) -> Self {
        let retriever: Box<dyn Retriever> = match strategy {
            RetrievalStrategy::Substring => Box::new(SubstringRetriever::new(
                deps.store.clone(),
                deps.faqs_collection.clone(),
            )),
            RetrievalStrategy::Vector => Box::new(VectorRetriever::new(
                deps.index.clone(),
                deps.engine.clone(),
                deps.top_k,
            )),
        };

        let generator: Box<dyn Generator> = match backend {
            GenerationBackend::Completion => Box::new(CompletionGenerator::new(
                deps.llm.clone(),
                deps.completion_model.clone(),
            )),
            GenerationBackend::Chat => Box::new(ChatGenerator::new(
                deps.llm.clone(),
                deps.chat_model.clone(),
            )),
        };

        Self::new(retriever, generator)
    }

    /// Answer one question: retrieve passages, generate an answer
    /// conditioned on them. Stateless across calls.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let passages = self.retriever.retrieve(question).await?;
        self.generator.generate(question, &passages).await
    }
}
