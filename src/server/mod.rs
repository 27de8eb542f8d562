//! HTTP façade
//!
//! axum router in front of the document store and the two RAG
//! pipelines. All shared collaborators are initialized once in `serve`
//! and cloned into the handler state; requests may run in parallel, so
//! store writes go through a process-wide RwLock.

pub mod error;
pub mod rag;
pub mod users;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::embedding::EmbeddingEngine;
use crate::models::OllamaClient;
use crate::rag::{GenerationBackend, PipelineDeps, RagPipeline, RetrievalStrategy};
use crate::store::DocumentStore;
use crate::vector_db::FaqIndex;

/// Shared state cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<DocumentStore>>,
    pub users_collection: String,
    pub ask_pipeline: Arc<RagPipeline>,
    pub generate_pipeline: Arc<RagPipeline>,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::welcome))
        // Existing consumers request the collection with a trailing
        // slash; axum does not redirect between the two forms, so both
        // are registered.
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/rag/ask", post(rag::ask))
        .route("/rag/generate_answer", post(rag::generate_answer))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialize every collaborator once and run the server.
///
/// The embedding engine and the vector index handle are opened here and
/// shared process-wide for the process lifetime; an unreachable index
/// or a dimension mismatch fails startup instead of degrading requests.
pub async fn serve(config: Config) -> Result<()> {
    let store = Arc::new(RwLock::new(
        DocumentStore::open(&config.store.data_dir).context("Failed to open document store")?,
    ));

    let llm = Arc::new(OllamaClient::new(
        &config.llm.base_url,
        Duration::from_secs(config.llm.timeout_secs),
    )?);

    if !llm.health_check().await? {
        tracing::warn!(url = %config.llm.base_url, "model server is not reachable yet");
    }

    tracing::info!(model = %config.embedding.model_id, "loading embedding model");
    let embedding_config = config.embedding.clone();
    let engine = tokio::task::spawn_blocking(move || EmbeddingEngine::load(&embedding_config))
        .await
        .context("Embedding engine startup task failed")??;
    let engine = Arc::new(engine);

    let index = Arc::new(
        FaqIndex::open(&config.vector, config.embedding.dimension)
            .await
            .context("Failed to open vector index")?,
    );
    tracing::info!(
        collection = index.collection(),
        chunks = index.count().await.unwrap_or(0),
        "vector index ready"
    );

    let deps = PipelineDeps {
        store: store.clone(),
        faqs_collection: config.store.faqs_collection.clone(),
        index,
        engine,
        llm,
        completion_model: config.llm.completion_model.clone(),
        chat_model: config.llm.chat_model.clone(),
        top_k: config.vector.top_k,
    };

    let state = AppState {
        store,
        users_collection: config.store.users_collection.clone(),
        ask_pipeline: Arc::new(RagPipeline::from_selectors(
            RetrievalStrategy::Substring,
            GenerationBackend::Completion,
            &deps,
        )),
        generate_pipeline: Arc::new(RagPipeline::from_selectors(
            RetrievalStrategy::Vector,
            GenerationBackend::Chat,
            &deps,
        )),
    };

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
