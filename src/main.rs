//! faqdesk - Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use faqdesk::cli::{Args, Commands};
use faqdesk::config::Config;
use faqdesk::embedding::EmbeddingEngine;
use faqdesk::rag::Passage;
use faqdesk::store::{DocumentStore, FaqRecord};
use faqdesk::vector_db::FaqIndex;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("faqdesk=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    match args.command.unwrap_or(Commands::Serve) {
        Commands::Serve => faqdesk::server::serve(config).await,
        Commands::Index => build_index(&config).await,
        Commands::Config => {
            let rendered = toml::to_string_pretty(&config)
                .context("Failed to render configuration")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Embed every FAQ record and upsert it into the vector index.
///
/// Chunk text is the same `"Q: …\nA: …"` formatting the substring
/// strategy serves, so both strategies present identical passage shapes
/// to the composer. Stored point ids reuse the document ids, so a
/// re-run replaces chunks instead of duplicating them.
async fn build_index(config: &Config) -> Result<()> {
    let store = DocumentStore::open(&config.store.data_dir)
        .context("Failed to open document store")?;
    let records: Vec<(String, FaqRecord)> = store
        .stream_all(&config.store.faqs_collection)
        .context("Failed to read FAQ collection")?;

    if records.is_empty() {
        tracing::warn!(
            collection = %config.store.faqs_collection,
            "FAQ collection is empty; nothing to index"
        );
        return Ok(());
    }

    tracing::info!(model = %config.embedding.model_id, "loading embedding model");
    let embedding_config = config.embedding.clone();
    let engine = tokio::task::spawn_blocking(move || EmbeddingEngine::load(&embedding_config))
        .await
        .context("Embedding engine startup task failed")??;

    let index = FaqIndex::open_for_ingest(&config.vector, config.embedding.dimension)
        .await
        .context("Failed to open vector index for ingest")?;

    let chunks: Vec<String> = records
        .iter()
        .map(|(_, record)| Passage::from_faq(record).text)
        .collect();

    let (chunks, embeddings) = tokio::task::spawn_blocking(move || {
        let embeddings = {
            let refs: Vec<&str> = chunks.iter().map(String::as_str).collect();
            engine.embed_batch(&refs)?
        };
        anyhow::Ok((chunks, embeddings))
    })
    .await
    .context("Embedding task failed")??;

    let items: Vec<(String, String, Vec<f32>)> = records
        .into_iter()
        .zip(chunks)
        .zip(embeddings)
        .map(|(((id, _), text), embedding)| (id, text, embedding))
        .collect();

    let count = items.len();
    index.upsert_chunks(items).await?;
    tracing::info!(
        collection = index.collection(),
        chunks = count,
        "vector index updated"
    );

    Ok(())
}
