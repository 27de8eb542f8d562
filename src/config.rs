//! Configuration for the FAQ assistant backend
//!
//! TOML-based configuration with defaults and validation.
//! Default location: ~/.faqdesk/config.toml
//!
//! The embedding model identifier and dimension must match the values
//! the vector index was built with; a mismatch is rejected at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration for the assistant service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub vector: VectorConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base directory holding one subdirectory per collection
    pub data_dir: PathBuf,
    pub users_collection: String,
    pub faqs_collection: String,
}

/// Language-model backend configuration (Ollama-compatible API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    /// Model used by the single-prompt completion backend
    pub completion_model: String,
    /// Model used by the system/human message-pair backend
    pub chat_model: String,
    pub timeout_secs: u64,
}

/// Embedding model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// HuggingFace model id, must match the index build-time model
    pub model_id: String,
    /// Output dimensionality, must match the index collection
    pub dimension: usize,
}

/// Vector index configuration (Qdrant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    pub url: String,
    pub collection: String,
    /// Number of nearest neighbors returned per query
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            llm: LlmConfig::default(),
            embedding: EmbeddingConfig::default(),
            vector: VectorConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".faqdesk")
            .join("data");

        Self {
            data_dir,
            users_collection: "users".to_string(),
            faqs_collection: "faqs".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            completion_model: "qwen2.5:7b-instruct".to_string(),
            chat_model: "qwen2.5:7b-instruct".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_id: "nomic-ai/nomic-embed-text-v1.5".to_string(),
            dimension: 768,
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:6334".to_string(),
            collection: "faqs".to_string(),
            top_k: 3,
        }
    }
}

impl Config {
    /// Load configuration, creating a default file if none exists.
    ///
    /// `path` overrides the default location when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            let config = Config::default();
            config.save(&config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the given path
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".faqdesk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.vector.top_k, 3);
        assert_eq!(config.embedding.dimension, 768);
        assert_eq!(config.store.faqs_collection, "faqs");
    }

    #[test]
    fn test_completion_and_chat_models_are_independent() {
        let mut config = Config::default();
        config.llm.chat_model = "llama3.1:8b".to_string();
        assert_ne!(config.llm.chat_model, "other");
        assert_eq!(config.llm.completion_model, "qwen2.5:7b-instruct");
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::default();
        config.vector.collection = "faq_chunks".to_string();
        config.server.port = 9001;

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("faq_chunks"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.vector.collection, "faq_chunks");
        assert_eq!(deserialized.server.port, 9001);
    }

    #[test]
    fn test_partial_config_uses_section_defaults() {
        let config: Config = toml::from_str("[server]\nhost = \"0.0.0.0\"\nport = 8080\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.vector.top_k, 3);
    }

    #[test]
    fn test_save_and_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.llm.completion_model = "mistral:7b".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.llm.completion_model, "mistral:7b");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.port, 8000);
    }
}
