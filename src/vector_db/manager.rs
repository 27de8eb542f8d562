// Qdrant-backed FAQ embedding index.
//
// The index is owned externally and read-only for the RAG core: the
// server opens one handle at startup and only searches it. The `index`
// subcommand is the single writer and uses the upsert path.
use anyhow::{Context, Result};
use qdrant_client::{
    client::QdrantClient,
    qdrant::{
        vectors_config::Config, with_payload_selector::SelectorOptions, CreateCollection,
        Distance, PointStruct, SearchPoints, Value as QdrantValue, VectorParams, VectorsConfig,
        WithPayloadSelector,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::VectorConfig;

/// One stored chunk returned from a nearest-neighbor search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub id: String,
    /// Raw stored text of the chunk
    pub text: String,
    /// Cosine similarity; results arrive best-first, i.e. ascending distance
    pub score: f32,
}

/// Handle on the FAQ vector collection
pub struct FaqIndex {
    client: QdrantClient,
    collection: String,
    dimension: u64,
}

impl FaqIndex {
    /// Open a read handle on an existing collection.
    ///
    /// Fails when the collection is missing or unreachable, and when its
    /// stored dimensionality disagrees with the configured one. Neither
    /// case degrades to an empty index.
    pub async fn open(config: &VectorConfig, dimension: usize) -> Result<Self> {
        let index = Self::connect(config, dimension)?;

        let info = index
            .client
            .collection_info(&index.collection)
            .await
            .with_context(|| {
                format!("vector index collection '{}' is not readable", index.collection)
            })?;

        let result = info.result.with_context(|| {
            format!("vector index collection '{}' not found", index.collection)
        })?;

        let stored_dim = result
            .config
            .as_ref()
            .and_then(|c| c.params.as_ref())
            .and_then(|p| p.vectors_config.as_ref())
            .and_then(|v| v.config.as_ref())
            .and_then(|cfg| match cfg {
                Config::Params(params) => Some(params.size),
                _ => None,
            });

        if let Some(stored) = stored_dim {
            if stored != index.dimension {
                anyhow::bail!(
                    "vector index dimension mismatch: configured {}, collection '{}' was built with {}",
                    index.dimension,
                    index.collection,
                    stored
                );
            }
        }

        Ok(index)
    }

    /// Open a write handle, creating the collection if it does not exist
    pub async fn open_for_ingest(config: &VectorConfig, dimension: usize) -> Result<Self> {
        let index = Self::connect(config, dimension)?;
        index.ensure_collection().await?;
        Ok(index)
    }

    fn connect(config: &VectorConfig, dimension: usize) -> Result<Self> {
        let client = QdrantClient::from_url(&config.url)
            .build()
            .context("Failed to create Qdrant client")?;

        Ok(Self {
            client,
            collection: config.collection.clone(),
            dimension: dimension as u64,
        })
    }

    /// Create the collection (cosine distance) when missing
    async fn ensure_collection(&self) -> Result<()> {
        let collections_list = self.client.list_collections().await?;
        let exists = collections_list
            .collections
            .iter()
            .any(|c| c.name == self.collection);

        if !exists {
            self.client
                .create_collection(&CreateCollection {
                    collection_name: self.collection.clone(),
                    vectors_config: Some(VectorsConfig {
                        config: Some(Config::Params(VectorParams {
                            size: self.dimension,
                            distance: Distance::Cosine.into(),
                            ..Default::default()
                        })),
                    }),
                    ..Default::default()
                })
                .await
                .with_context(|| format!("Failed to create collection: {}", self.collection))?;
        }

        Ok(())
    }

    /// Upsert chunk texts with their embeddings
    pub async fn upsert_chunks(&self, items: Vec<(String, String, Vec<f32>)>) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let points: Vec<PointStruct> = items
            .into_iter()
            .map(|(id, text, embedding)| {
                let mut payload_map = HashMap::new();
                payload_map.insert("text".to_string(), QdrantValue::from(text));
                PointStruct::new(id, embedding, payload_map)
            })
            .collect();

        self.client
            .upsert_points_blocking(&self.collection, None, points, None)
            .await
            .context("Failed to upsert points")?;

        Ok(())
    }

    /// Nearest-neighbor search: the k closest chunks, best-first.
    ///
    /// No score threshold is applied; all k hits are returned regardless
    /// of distance, per the retrieval contract.
    pub async fn search(&self, query_embedding: &[f32], k: usize) -> Result<Vec<ScoredChunk>> {
        let search_result = self
            .client
            .search_points(&SearchPoints {
                collection_name: self.collection.clone(),
                vector: query_embedding.to_vec(),
                limit: k as u64,
                with_payload: Some(WithPayloadSelector {
                    selector_options: Some(SelectorOptions::Enable(true)),
                }),
                ..Default::default()
            })
            .await
            .context("Failed to search points")?;

        let chunks = search_result
            .result
            .into_iter()
            .map(|point| {
                let text = point
                    .payload
                    .get("text")
                    .and_then(qdrant_value_to_string)
                    .unwrap_or_default();

                ScoredChunk {
                    id: point_id_to_string(&point.id),
                    text,
                    score: point.score,
                }
            })
            .collect();

        Ok(chunks)
    }

    /// Number of stored chunks
    pub async fn count(&self) -> Result<u64> {
        let info = self
            .client
            .collection_info(&self.collection)
            .await
            .context("Failed to get collection info")?;

        Ok(info.result.and_then(|r| r.points_count).unwrap_or(0))
    }

    /// Collection name this handle points at
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

fn qdrant_value_to_string(value: &QdrantValue) -> Option<String> {
    value.kind.as_ref().and_then(|kind| {
        use qdrant_client::qdrant::value::Kind;
        match kind {
            Kind::StringValue(s) => Some(s.clone()),
            _ => None,
        }
    })
}

fn point_id_to_string(point_id: &Option<qdrant_client::qdrant::PointId>) -> String {
    point_id
        .as_ref()
        .map(|id| {
            use qdrant_client::qdrant::point_id::PointIdOptions;
            match &id.point_id_options {
                Some(PointIdOptions::Num(n)) => n.to_string(),
                Some(PointIdOptions::Uuid(u)) => u.clone(),
                None => "unknown".to_string(),
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> VectorConfig {
        VectorConfig {
            url: "http://localhost:6334".to_string(),
            collection: "faqs_test".to_string(),
            top_k: 3,
        }
    }

    #[tokio::test]
    #[ignore] // Integration test - requires Qdrant
    async fn test_open_missing_collection_fails() {
        let config = VectorConfig {
            collection: "definitely_not_there".to_string(),
            ..test_config()
        };
        let result = FaqIndex::open(&config, 768).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore] // Integration test - requires Qdrant
    async fn test_upsert_and_search() {
        let config = test_config();
        let index = FaqIndex::open_for_ingest(&config, 768).await.unwrap();

        let embedding = vec![0.1; 768];
        index
            .upsert_chunks(vec![(
                uuid::Uuid::new_v4().to_string(),
                "Q: How do I reset my password?\nA: Go to settings > security.".to_string(),
                embedding.clone(),
            )])
            .await
            .unwrap();

        let hits = index.search(&embedding, 3).await.unwrap();
        assert!(!hits.is_empty());
        assert!(hits.len() <= 3);
        assert!(hits[0].text.contains("password"));
    }

    #[tokio::test]
    #[ignore] // Integration test - requires Qdrant
    async fn test_search_results_are_best_first() {
        let config = test_config();
        let index = FaqIndex::open_for_ingest(&config, 768).await.unwrap();

        let hits = index.search(&vec![0.1; 768], 3).await.unwrap();
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
