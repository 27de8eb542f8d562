//! JSON document store
//!
//! A small collection-oriented store: one directory per collection, one
//! pretty-printed JSON file per document, uuid-v4 document ids. This is
//! the generic CRUD collaborator behind the user endpoints and the
//! substring retriever; it carries no retrieval logic of its own.
//!
//! `stream_all` is a full directory scan ordered by document id, which
//! fixes the corpus iteration order seen by the substring retriever.

pub mod types;

pub use types::{FaqRecord, UserCreate, UserRecord, UserUpdate};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Collection-oriented document store rooted at a data directory
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    /// Open a store, creating the data directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .context("Failed to create document store directory")?;
        }
        Ok(Self { data_dir })
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.data_dir.join(collection)
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", id))
    }

    /// Read one document; `None` when the id is unknown
    pub fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>> {
        let path = self.document_path(collection, id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read document '{}'", id))?;
        let value = serde_json::from_str(&json)
            .with_context(|| format!("Failed to deserialize document '{}'", id))?;

        Ok(Some(value))
    }

    /// Read every document in a collection, ordered by document id.
    ///
    /// A missing collection directory is an empty collection, not an
    /// error: it simply has no documents yet.
    pub fn stream_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<(String, T)>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
                    if let Some(id) = filename.strip_suffix(".json") {
                        ids.push(id.to_string());
                    }
                }
            }
        }
        ids.sort();

        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(value) = self.get(collection, &id)? {
                documents.push((id, value));
            }
        }

        Ok(documents)
    }

    /// Insert a new document under a generated uuid-v4 id
    pub fn insert<T: Serialize>(&self, collection: &str, value: &T) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.put(collection, &id, value)?;
        Ok(id)
    }

    /// Write a document under an explicit id, replacing any existing one
    pub fn put<T: Serialize>(&self, collection: &str, id: &str, value: &T) -> Result<()> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create collection '{}'", collection))?;
        }

        let json = serde_json::to_string_pretty(value)
            .context("Failed to serialize document")?;
        fs::write(self.document_path(collection, id), json)
            .with_context(|| format!("Failed to write document '{}'", id))?;

        Ok(())
    }

    /// Delete a document; returns false when the id was unknown
    pub fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let path = self.document_path(collection, id);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete document '{}'", id))?;

        Ok(true)
    }

    /// Base directory of the store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (DocumentStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DocumentStore::open(temp_dir.path().join("data")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_insert_and_get() {
        let (store, _temp) = create_test_store();

        let user = UserCreate {
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
        };
        let id = store.insert("users", &user).unwrap();

        let loaded: UserCreate = store.get("users", &id).unwrap().unwrap();
        assert_eq!(loaded, user);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let (store, _temp) = create_test_store();
        let loaded: Option<UserCreate> = store.get("users", "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_stream_all_empty_collection() {
        let (store, _temp) = create_test_store();
        let docs: Vec<(String, FaqRecord)> = store.stream_all("faqs").unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_stream_all_ordered_by_id() {
        let (store, _temp) = create_test_store();

        for id in ["c", "a", "b"] {
            let faq = FaqRecord {
                question: format!("q-{}", id),
                answer: format!("a-{}", id),
            };
            store.put("faqs", id, &faq).unwrap();
        }

        let docs: Vec<(String, FaqRecord)> = store.stream_all("faqs").unwrap();
        let ids: Vec<&str> = docs.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_put_replaces_existing() {
        let (store, _temp) = create_test_store();

        let mut user = UserCreate {
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
        };
        let id = store.insert("users", &user).unwrap();

        user.user_email = "lovelace@example.com".to_string();
        store.put("users", &id, &user).unwrap();

        let loaded: UserCreate = store.get("users", &id).unwrap().unwrap();
        assert_eq!(loaded.user_email, "lovelace@example.com");
    }

    #[test]
    fn test_delete() {
        let (store, _temp) = create_test_store();

        let user = UserCreate {
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
        };
        let id = store.insert("users", &user).unwrap();

        assert!(store.delete("users", &id).unwrap());
        assert!(!store.delete("users", &id).unwrap());
        let loaded: Option<UserCreate> = store.get("users", &id).unwrap();
        assert!(loaded.is_none());
    }
}
