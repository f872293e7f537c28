//! Persisted JSON document for the graph and its statistics.

use crate::store::KnowledgeGraph;
use crate::types::{GraphEdge, GraphNode};
use litmap_core::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// On-disk form of a built graph: node list, edge list, statistics block.
///
/// Statistics travel as opaque JSON here; the snapshot type that produces
/// them lives downstream of this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub statistics: serde_json::Value,
}

impl GraphDocument {
    /// Capture a graph into document form, nodes and edges in insertion order.
    pub fn from_graph(graph: &KnowledgeGraph, statistics: serde_json::Value) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().cloned().collect(),
            statistics,
        }
    }

    /// Rebuild a graph from document content.
    ///
    /// An edge naming a node absent from the document is a load failure, not
    /// something to repair; the partially built graph is discarded.
    pub fn into_graph(self) -> Result<KnowledgeGraph> {
        let mut graph = KnowledgeGraph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            graph.add_edge(edge)?;
        }
        info!(
            "Graph loaded from document: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeKind, Relation};
    use litmap_core::Error;

    fn sample_graph() -> KnowledgeGraph {
        let mut kg = KnowledgeGraph::new();
        kg.add_node(
            GraphNode::new("pub_0", "T1", NodeKind::Publication).with_property("title", "T1"),
        );
        kg.add_node(GraphNode::new("author_a", "A", NodeKind::Author));
        kg.add_node(GraphNode::new("author_b", "B", NodeKind::Author));
        kg.add_edge(GraphEdge::new("pub_0", "author_a", Relation::AuthoredBy))
            .unwrap();
        kg.add_edge(GraphEdge::new("pub_0", "author_b", Relation::AuthoredBy))
            .unwrap();
        kg.add_edge(GraphEdge::new("author_a", "author_b", Relation::CoAuthors))
            .unwrap();
        kg
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let original = sample_graph();
        let text = GraphDocument::from_graph(&original, serde_json::Value::Null)
            .to_json()
            .unwrap();
        let restored = GraphDocument::from_json(&text).unwrap().into_graph().unwrap();

        assert_eq!(restored.node_count(), original.node_count());
        assert_eq!(restored.edge_count(), original.edge_count());
        for relation in Relation::all() {
            assert_eq!(
                restored.relation_count(*relation),
                original.relation_count(*relation)
            );
        }
        assert_eq!(
            restored.node("pub_0").unwrap().properties,
            original.node("pub_0").unwrap().properties
        );
    }

    #[test]
    fn test_dangling_edge_fails_load() {
        let doc = GraphDocument {
            nodes: vec![GraphNode::new("author_a", "A", NodeKind::Author)],
            edges: vec![GraphEdge::new("author_a", "author_b", Relation::CoAuthors)],
            statistics: serde_json::Value::Null,
        };
        let err = doc.into_graph().unwrap_err();
        assert!(matches!(err, Error::UnknownNode(id) if id == "author_b"));
    }

    #[test]
    fn test_malformed_document_fails_load() {
        let err = GraphDocument::from_json("{\"nodes\": 3}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_weight_defaults_on_import() {
        let text = r#"{
            "nodes": [
                {"id": "author_a", "label": "A", "type": "author"},
                {"id": "author_b", "label": "B", "type": "author"}
            ],
            "edges": [
                {"source": "author_a", "target": "author_b", "relationship_type": "co_authors"}
            ]
        }"#;
        let graph = GraphDocument::from_json(text).unwrap().into_graph().unwrap();
        assert_eq!(graph.node("author_a").unwrap().weight, 1.0);
        assert_eq!(
            graph.edges_by_relation(Relation::CoAuthors).next().unwrap().weight,
            1.0
        );
    }
}
