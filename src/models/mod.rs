//! Language-model backend client

pub mod client;
pub mod types;

pub use client::OllamaClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, GenerateRequest, GenerateResponse};
