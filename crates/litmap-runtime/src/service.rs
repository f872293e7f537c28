//! Graph lifecycle service: build, freeze, serve, swap.

use crate::types::{GraphSnapshot, ServiceStatus};
use litmap_core::{LitmapConfig, Result};
use litmap_graph::GraphDocument;
use litmap_ingest::{GraphBuilder, PublicationRecord};
use litmap_query::{
    centrality, collaboration_network, keyword_co_occurrence, CentralityEntry, CentralityKind,
    CollaborationNetwork, KeywordCoOccurrence,
};
use litmap_stats::{GraphStatistics, StatisticsEngine};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Shared handle over the current graph snapshot.
///
/// Readers clone the `Arc` under a short read lock and work lock-free
/// from there; a rebuild constructs its replacement off-lock and swaps
/// it in under the write lock.
pub struct GraphService {
    inner: RwLock<Arc<GraphSnapshot>>,
    config: LitmapConfig,
}

impl GraphService {
    /// Start serving an empty snapshot.
    pub fn new(config: LitmapConfig) -> Self {
        Self {
            inner: RwLock::new(Arc::new(GraphSnapshot::default())),
            config,
        }
    }

    /// Start with configuration taken from the environment.
    pub fn from_env() -> Self {
        Self::new(LitmapConfig::from_env())
    }

    pub fn config(&self) -> &LitmapConfig {
        &self.config
    }

    /// Current snapshot; cheap, and safe to hold across a rebuild.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        self.inner.read().clone()
    }

    /// Build a fresh graph from records and swap it in.
    pub fn rebuild(&self, records: &[PublicationRecord]) -> Result<()> {
        let graph = GraphBuilder::build(records)?;
        let statistics = StatisticsEngine::compute(&graph, self.config.ranking_size);
        self.swap(GraphSnapshot { graph, statistics });
        Ok(())
    }

    /// Load the persisted document from the configured path and swap it in.
    ///
    /// Statistics are recomputed from the loaded graph rather than trusted
    /// from the document, so the snapshot always matches its graph.
    pub fn load_document(&self) -> Result<()> {
        let text = std::fs::read_to_string(&self.config.document_path)?;
        let graph = GraphDocument::from_json(&text)?.into_graph()?;
        let statistics = StatisticsEngine::compute(&graph, self.config.ranking_size);
        self.swap(GraphSnapshot { graph, statistics });
        Ok(())
    }

    /// Write the current snapshot to the configured path, creating parent
    /// directories as needed.
    pub fn save_document(&self) -> Result<()> {
        let document = self.document()?;
        let path = &self.config.document_path;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, document.to_json()?)?;
        info!("Graph document saved to {}", path.display());
        Ok(())
    }

    /// Current snapshot in document form, statistics included.
    pub fn document(&self) -> Result<GraphDocument> {
        let snapshot = self.snapshot();
        let statistics = serde_json::to_value(&snapshot.statistics)?;
        Ok(GraphDocument::from_graph(&snapshot.graph, statistics))
    }

    /// Statistics frozen with the current snapshot.
    pub fn statistics(&self) -> GraphStatistics {
        self.snapshot().statistics.clone()
    }

    /// Collaboration network, falling back to the configured depth.
    pub fn collaboration_network(
        &self,
        author_name: &str,
        depth: Option<usize>,
    ) -> Option<CollaborationNetwork> {
        let snapshot = self.snapshot();
        collaboration_network(
            &snapshot.graph,
            author_name,
            depth.unwrap_or(self.config.default_depth),
        )
    }

    /// Keyword co-occurrence, falling back to the configured threshold.
    pub fn keyword_co_occurrence(
        &self,
        keyword: &str,
        min_count: Option<usize>,
    ) -> Option<KeywordCoOccurrence> {
        let snapshot = self.snapshot();
        keyword_co_occurrence(
            &snapshot.graph,
            keyword,
            min_count.unwrap_or(self.config.min_co_occurrence),
        )
    }

    /// Centrality ranking, cut to the configured size by default.
    pub fn centrality_ranking(
        &self,
        kind: CentralityKind,
        top_n: Option<usize>,
    ) -> Vec<CentralityEntry> {
        let snapshot = self.snapshot();
        centrality(
            &snapshot.graph,
            kind,
            top_n.unwrap_or(self.config.ranking_size),
        )
    }

    pub fn status(&self) -> ServiceStatus {
        let snapshot = self.snapshot();
        ServiceStatus {
            graph_loaded: snapshot.graph.node_count() > 0,
            nodes: snapshot.graph.node_count(),
            edges: snapshot.graph.edge_count(),
        }
    }

    fn swap(&self, snapshot: GraphSnapshot) {
        let nodes = snapshot.graph.node_count();
        let edges = snapshot.graph.edge_count();
        *self.inner.write() = Arc::new(snapshot);
        info!("Graph snapshot swapped: {} nodes, {} edges", nodes, edges);
    }
}

impl Default for GraphService {
    fn default() -> Self {
        Self::new(LitmapConfig::default())
    }
}
