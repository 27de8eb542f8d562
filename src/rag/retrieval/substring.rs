//! Substring retrieval strategy
//!
//! The naive baseline: a full O(corpus size) scan of the FAQ collection
//! per query, no index, no ranking. Acceptable only because the corpus
//! is assumed small.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{AssistantError, Result};
use crate::rag::retrieval::{Passage, Retriever};
use crate::store::{DocumentStore, FaqRecord};

/// Linear substring scan over the FAQ collection.
///
/// A record matches when the lowercased query is a substring of its
/// lowercased question or answer. Matches are returned in corpus
/// iteration order, unbounded. An empty query matches every record;
/// callers own that policy.
pub struct SubstringRetriever {
    store: Arc<RwLock<DocumentStore>>,
    collection: String,
}

impl SubstringRetriever {
    pub fn new(store: Arc<RwLock<DocumentStore>>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

/// Pure matching core: every record whose question or answer contains
/// the lowercased query, as passages, in input order
pub fn filter_records<'a>(
    query: &str,
    records: impl Iterator<Item = &'a FaqRecord>,
) -> Vec<Passage> {
    let q_lower = query.to_lowercase();

    records
        .filter(|record| {
            record.question.to_lowercase().contains(&q_lower)
                || record.answer.to_lowercase().contains(&q_lower)
        })
        .map(Passage::from_faq)
        .collect()
}

#[async_trait]
impl Retriever for SubstringRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>> {
        let store = self.store.read().await;
        let records: Vec<(String, FaqRecord)> = store
            .stream_all(&self.collection)
            .map_err(|e| AssistantError::Retrieval(format!("FAQ collection unreadable: {:#}", e)))?;

        Ok(filter_records(query, records.iter().map(|(_, r)| r)))
    }
}
