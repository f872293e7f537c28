//! Runtime types.

use litmap_graph::KnowledgeGraph;
use litmap_stats::GraphStatistics;
use serde::Serialize;

/// One frozen graph with the statistics computed for it.
///
/// Snapshots are immutable once handed out; a rebuild swaps in a new one
/// instead of touching graphs that readers may still hold.
#[derive(Default)]
pub struct GraphSnapshot {
    pub graph: KnowledgeGraph,
    pub statistics: GraphStatistics,
}

/// Liveness-style service report.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Whether a non-empty graph is being served.
    pub graph_loaded: bool,
    pub nodes: usize,
    pub edges: usize,
}
