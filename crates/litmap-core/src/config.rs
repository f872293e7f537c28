//! Configuration with environment overrides.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level litmap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LitmapConfig {
    /// Number of entries kept in ranked listings (top authors, centrality).
    pub ranking_size: usize,
    /// Default expansion depth for collaboration network queries.
    pub default_depth: usize,
    /// Default minimum tally for keyword co-occurrence results.
    pub min_co_occurrence: usize,
    /// Persisted graph document path (`data/knowledge_graph.json`).
    pub document_path: PathBuf,
}

impl LitmapConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let ranking_size = std::env::var("LITMAP_RANKING_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let default_depth = std::env::var("LITMAP_DEFAULT_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let min_co_occurrence = std::env::var("LITMAP_MIN_CO_OCCURRENCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let document_path = std::env::var("LITMAP_DOCUMENT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/knowledge_graph.json"));

        Self {
            ranking_size,
            default_depth,
            min_co_occurrence,
            document_path,
        }
    }
}

impl Default for LitmapConfig {
    fn default() -> Self {
        Self {
            ranking_size: 10,
            default_depth: 2,
            min_co_occurrence: 1,
            document_path: PathBuf::from("data/knowledge_graph.json"),
        }
    }
}
