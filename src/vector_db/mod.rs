//! Vector index access (Qdrant)

pub mod manager;

pub use manager::{FaqIndex, ScoredChunk};
