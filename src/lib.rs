//! faqdesk - Retrieval-augmented FAQ assistant backend
//!
//! A stateless question-answering service: CRUD over a user record
//! store plus two RAG endpoints that retrieve supporting FAQ passages
//! and ask a language model to synthesize an answer.
//!
//! # Architecture
//!
//! - **store**: JSON document store (users, FAQ corpus)
//! - **rag**: retrieval strategies, prompt composition, generation
//!   backends, and the orchestrating pipeline
//! - **embedding** / **vector_db**: query embedding and the Qdrant
//!   nearest-neighbor index behind the vector strategy
//! - **models**: Ollama-compatible model client (completion and chat)
//! - **server**: axum HTTP façade

pub mod errors;
pub mod config;
pub mod cli;
pub mod store;
pub mod models;
pub mod embedding;
pub mod vector_db;
pub mod rag;
pub mod server;

// Re-export commonly used types
pub use errors::{AssistantError, Result};
