//! petgraph-backed store for the publication graph.

use crate::types::{GraphEdge, GraphNode, Relation};
use litmap_core::{Error, Result};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Directed multigraph of publications and the entities around them.
///
/// Parallel edges are kept distinct, including exact duplicates. Node indexes
/// follow insertion order, which ranking tie-breaks rely on.
#[derive(Debug)]
pub struct KnowledgeGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    node_index: HashMap<String, NodeIndex>,
    relation_index: HashMap<Relation, Vec<EdgeIndex>>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            relation_index: HashMap::new(),
        }
    }

    /// Insert or overwrite the node at `node.id`. Last write wins.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&index) = self.node_index.get(&node.id) {
            self.graph[index] = node;
            index
        } else {
            let id = node.id.clone();
            let index = self.graph.add_node(node);
            self.node_index.insert(id, index);
            index
        }
    }

    /// Append an edge. Both endpoints must already exist in the node index.
    pub fn add_edge(&mut self, edge: GraphEdge) -> Result<EdgeIndex> {
        let source = self
            .node_index
            .get(&edge.source)
            .copied()
            .ok_or_else(|| Error::UnknownNode(edge.source.clone()))?;
        let target = self
            .node_index
            .get(&edge.target)
            .copied()
            .ok_or_else(|| Error::UnknownNode(edge.target.clone()))?;

        let relation = edge.relation;
        let index = self.graph.add_edge(source, target, edge);
        self.relation_index.entry(relation).or_default().push(index);
        Ok(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index
            .get(id)
            .and_then(|index| self.graph.node_weight(*index))
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn node_at(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(index)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_weights()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.graph.edge_weights()
    }

    /// Outgoing edges from `id`, optionally narrowed to one relation.
    /// Unknown ids yield an empty list.
    pub fn neighbors(&self, id: &str, relation: Option<Relation>) -> Vec<&GraphEdge> {
        let Some(&index) = self.node_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .edges(index)
            .map(|edge| edge.weight())
            .filter(|edge| relation.map_or(true, |wanted| edge.relation == wanted))
            .collect()
    }

    /// Every edge of one relation, in insertion order.
    pub fn edges_by_relation(&self, relation: Relation) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.relation_index
            .get(&relation)
            .into_iter()
            .flatten()
            .filter_map(|index| self.graph.edge_weight(*index))
    }

    pub fn relation_count(&self, relation: Relation) -> usize {
        self.relation_index.get(&relation).map_or(0, Vec::len)
    }

    /// Neighbor indexes ignoring edge direction; the read-only undirected view
    /// that path queries run over. Parallel edges repeat their endpoint here.
    pub fn undirected_neighbors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_undirected(index)
    }

    /// Borrow the underlying directed graph.
    pub fn graph(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}
