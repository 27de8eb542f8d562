// RAG (Retrieval-Augmented Generation) core.
//
// Data flows one way per request:
// question -> retriever -> passages -> composer -> prompt -> generator -> answer
//
// Components:
// - Retrieval: substring scan or vector nearest-neighbor lookup
// - Context: passage joining, sentinel substitution, prompt template
// - Generation: completion or chat backend
// - Pipeline: end-to-end orchestration over the two selector axes

pub mod context;
pub mod generation;
pub mod pipeline;
pub mod retrieval;

// Re-export key types
pub use context::{PromptComposer, NO_DATA_SENTINEL};
pub use generation::{ChatGenerator, CompletionGenerator, GenerationBackend, Generator};
pub use pipeline::{PipelineDeps, RagPipeline};
pub use retrieval::{
    Passage, Retriever, RetrievalStrategy, SubstringRetriever, VectorRetriever,
};
