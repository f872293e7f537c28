//! Statistics snapshot types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a ranked listing, keyed by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub count: usize,
}

/// Metrics over the author projection: author nodes plus `co_authors`
/// edges, collapsed to a simple undirected graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaborationStats {
    pub total_authors: usize,
    pub connected_components: usize,
    pub largest_component_size: usize,
    pub average_clustering: f64,
}

/// Aggregate snapshot derived once from a completed graph. Never patched;
/// a rebuild replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Node counts by kind; kinds with no nodes are absent.
    pub node_types: BTreeMap<String, usize>,
    /// Edge counts by relation; relations with no edges are absent.
    pub edge_types: BTreeMap<String, usize>,
    pub most_connected_authors: Vec<RankedEntry>,
    pub most_productive_journals: Vec<RankedEntry>,
    pub theme_distribution: Vec<RankedEntry>,
    pub collaboration_network_stats: CollaborationStats,
}
