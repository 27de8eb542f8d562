//! RAG endpoints
//!
//! Two fixed default pairings over the shared pipeline machinery:
//! `/rag/ask` answers via substring retrieval and the completion
//! backend, `/rag/generate_answer` via vector retrieval and the chat
//! backend. Pipeline errors surface as uniform request failures.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::AppState;

/// Request body shared by both RAG endpoints
#[derive(Debug, Deserialize)]
pub struct RagRequest {
    pub question: String,
}

/// Response body for POST /rag/ask
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Response body for POST /rag/generate_answer
#[derive(Debug, Serialize)]
pub struct GenerateAnswerResponse {
    pub llm_generated_answer: String,
}

/// POST /rag/ask - substring retrieval, completion backend
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<RagRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    tracing::info!(strategy = "substring", backend = "completion", "answering question");

    let answer = state.ask_pipeline.answer(&request.question).await?;

    Ok(Json(AskResponse { answer }))
}

/// POST /rag/generate_answer - vector retrieval, chat backend
pub async fn generate_answer(
    State(state): State<AppState>,
    Json(request): Json<RagRequest>,
) -> Result<Json<GenerateAnswerResponse>, ApiError> {
    tracing::info!(strategy = "vector", backend = "chat", "answering question");

    let llm_generated_answer = state.generate_pipeline.answer(&request.question).await?;

    Ok(Json(GenerateAnswerResponse {
        llm_generated_answer,
    }))
}
