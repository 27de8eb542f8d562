//! Local text embedding

pub mod engine;

pub use engine::EmbeddingEngine;
