//! Bounded-depth collaboration network expansion.

use crate::types::{CollaborationNetwork, NetworkEdge, NetworkNode};
use litmap_graph::{node_id, KnowledgeGraph, NodeKind, Relation};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashSet;

/// Expand the co-authorship neighborhood of an author for `depth` rounds.
///
/// Traversal follows `co_authors` edges in both directions, since
/// construction only stores the earlier-listed side of each pair. Every
/// `(current, neighbor)` pair inspected lands in the edge list, so edges
/// back into already-visited nodes repeat across rounds. `None` when the
/// author is not in the graph.
pub fn collaboration_network(
    graph: &KnowledgeGraph,
    author_name: &str,
    depth: usize,
) -> Option<CollaborationNetwork> {
    let author_id = node_id(NodeKind::Author, author_name);
    let origin = graph.index_of(&author_id)?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut result_order: Vec<NodeIndex> = vec![origin];
    let mut result_seen: HashSet<NodeIndex> = HashSet::from([origin]);
    let mut result_edges: Vec<(NodeIndex, NodeIndex)> = Vec::new();
    let mut frontier: Vec<NodeIndex> = vec![origin];

    for _ in 0..depth {
        let mut next_frontier: Vec<NodeIndex> = Vec::new();
        let mut next_seen: HashSet<NodeIndex> = HashSet::new();

        for &current in &frontier {
            if !visited.insert(current) {
                continue;
            }
            for neighbor in co_author_neighbors(graph, current) {
                result_edges.push((current, neighbor));
                if result_seen.insert(neighbor) {
                    result_order.push(neighbor);
                }
                if next_seen.insert(neighbor) {
                    next_frontier.push(neighbor);
                }
            }
        }
        frontier = next_frontier;
    }

    let nodes = result_order
        .iter()
        .filter_map(|&index| graph.node_at(index))
        .map(NetworkNode::from)
        .collect();
    let edges = result_edges
        .iter()
        .filter_map(|&(source, target)| {
            let source = graph.node_at(source)?;
            let target = graph.node_at(target)?;
            Some(NetworkEdge {
                source: source.id.clone(),
                target: target.id.clone(),
                relation: Relation::CoAuthors,
            })
        })
        .collect();

    Some(CollaborationNetwork {
        author_name: author_name.to_string(),
        depth,
        nodes,
        edges,
    })
}

/// Distinct co-author neighbors of `index`, outgoing edges first, then
/// incoming. A parallel edge never repeats its neighbor.
fn co_author_neighbors(graph: &KnowledgeGraph, index: NodeIndex) -> Vec<NodeIndex> {
    let inner = graph.graph();
    let mut seen = HashSet::new();
    let mut neighbors = Vec::new();

    for direction in [Direction::Outgoing, Direction::Incoming] {
        for edge in inner.edges_directed(index, direction) {
            if edge.weight().relation != Relation::CoAuthors {
                continue;
            }
            let other = match direction {
                Direction::Outgoing => edge.target(),
                Direction::Incoming => edge.source(),
            };
            if seen.insert(other) {
                neighbors.push(other);
            }
        }
    }
    neighbors
}
