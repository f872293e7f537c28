//! Shortest paths over the undirected view.

use crate::types::{NetworkNode, ShortestPath};
use litmap_graph::KnowledgeGraph;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet, VecDeque};

/// Unweighted shortest path between two node ids, ignoring edge direction.
///
/// `None` when either endpoint id is absent. Endpoints in different
/// components yield an empty path with length `-1`.
pub fn shortest_path(
    graph: &KnowledgeGraph,
    source_id: &str,
    target_id: &str,
) -> Option<ShortestPath> {
    let source = graph.index_of(source_id)?;
    let target = graph.index_of(target_id)?;

    let indices = match bfs_path(graph, source, target) {
        Some(indices) => indices,
        None => {
            return Some(ShortestPath {
                source: source_id.to_string(),
                target: target_id.to_string(),
                path: Vec::new(),
                path_length: -1,
            });
        }
    };

    let path: Vec<NetworkNode> = indices
        .iter()
        .filter_map(|&index| graph.node_at(index))
        .map(NetworkNode::from)
        .collect();
    let path_length = path.len() as i64 - 1;

    Some(ShortestPath {
        source: source_id.to_string(),
        target: target_id.to_string(),
        path,
        path_length,
    })
}

/// BFS with predecessor reconstruction. `None` when `target` is unreachable.
fn bfs_path(
    graph: &KnowledgeGraph,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    if source == target {
        return Some(vec![source]);
    }

    let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut visited: HashSet<NodeIndex> = HashSet::from([source]);
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([source]);
    let mut found = false;

    'search: while let Some(current) = queue.pop_front() {
        for neighbor in graph.undirected_neighbors(current) {
            if visited.insert(neighbor) {
                predecessor.insert(neighbor, current);
                if neighbor == target {
                    found = true;
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    if !found {
        return None;
    }

    let mut indices = vec![target];
    let mut current = target;
    while let Some(&previous) = predecessor.get(&current) {
        indices.push(previous);
        current = previous;
    }
    indices.reverse();
    Some(indices)
}
