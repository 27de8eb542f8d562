//! Substring retrieval against a real on-disk FAQ collection.

use std::sync::Arc;
use tokio::sync::RwLock;

use faqdesk::rag::{PromptComposer, Retriever, SubstringRetriever, NO_DATA_SENTINEL};
use faqdesk::store::{DocumentStore, FaqRecord};

fn seed_store(records: &[(&str, &str, &str)]) -> (Arc<RwLock<DocumentStore>>, tempfile::TempDir) {
    let temp = tempfile::TempDir::new().unwrap();
    let store = DocumentStore::open(temp.path().join("data")).unwrap();

    for (id, question, answer) in records {
        let record = FaqRecord {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        store.put("faqs", id, &record).unwrap();
    }

    (Arc::new(RwLock::new(store)), temp)
}

#[tokio::test]
async fn test_password_query_returns_the_formatted_passage() {
    let (store, _temp) = seed_store(&[(
        "a",
        "How do I reset my password?",
        "Go to settings > security.",
    )]);

    let retriever = SubstringRetriever::new(store, "faqs");
    let passages = retriever.retrieve("password").await.unwrap();

    assert_eq!(passages.len(), 1);
    assert_eq!(
        passages[0].text,
        "Q: How do I reset my password?\nA: Go to settings > security."
    );
}

#[tokio::test]
async fn test_empty_corpus_composes_the_sentinel_context() {
    let (store, _temp) = seed_store(&[]);

    let retriever = SubstringRetriever::new(store, "faqs");
    let passages = retriever.retrieve("anything").await.unwrap();
    assert!(passages.is_empty());

    let context = PromptComposer::new().build_context(&passages);
    assert_eq!(context, NO_DATA_SENTINEL);
}

#[tokio::test]
async fn test_all_matches_returned_unbounded() {
    let records: Vec<(String, String, String)> = (0..20)
        .map(|i| {
            (
                format!("{:02}", i),
                format!("Question {} about billing", i),
                "Answer.".to_string(),
            )
        })
        .collect();
    let refs: Vec<(&str, &str, &str)> = records
        .iter()
        .map(|(id, q, a)| (id.as_str(), q.as_str(), a.as_str()))
        .collect();
    let (store, _temp) = seed_store(&refs);

    let retriever = SubstringRetriever::new(store, "faqs");
    let passages = retriever.retrieve("billing").await.unwrap();

    // Substring retrieval has no top-k bound
    assert_eq!(passages.len(), 20);
}
