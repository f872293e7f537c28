//! Centrality rankings over the whole graph.

use crate::types::{CentralityEntry, CentralityKind};
use litmap_graph::KnowledgeGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Rank every node by the requested centrality measure, highest first.
/// Ties keep insertion order; the ranking is cut to `top_n` entries.
pub fn centrality(
    graph: &KnowledgeGraph,
    kind: CentralityKind,
    top_n: usize,
) -> Vec<CentralityEntry> {
    let scores = match kind {
        CentralityKind::Degree => degree_scores(graph),
        CentralityKind::Betweenness => betweenness_scores(graph),
        CentralityKind::Closeness => closeness_scores(graph),
    };

    let mut entries: Vec<CentralityEntry> = graph
        .nodes()
        .zip(scores)
        .map(|(node, score)| CentralityEntry {
            id: node.id.clone(),
            label: node.label.clone(),
            kind: node.kind,
            score,
        })
        .collect();
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    entries.truncate(top_n);

    debug!("Ranked {} nodes by {} centrality", graph.node_count(), kind);
    entries
}

/// Directed degree over all edges, parallel ones included, scaled by
/// `1 / (n - 1)`. Graphs of one node score a flat 1.0.
fn degree_scores(graph: &KnowledgeGraph) -> Vec<f64> {
    let inner = graph.graph();
    let n = inner.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }

    let scale = 1.0 / (n as f64 - 1.0);
    inner
        .node_indices()
        .map(|index| {
            let degree = inner.edges_directed(index, Direction::Outgoing).count()
                + inner.edges_directed(index, Direction::Incoming).count();
            degree as f64 * scale
        })
        .collect()
}

/// Brandes' accumulation over distinct successors, scaled by
/// `1 / ((n - 1)(n - 2))`. Parallel edges and self-loops do not add paths.
fn betweenness_scores(graph: &KnowledgeGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n < 3 {
        return vec![0.0; n];
    }

    let adjacency = directed_adjacency(graph, Direction::Outgoing);
    let mut scores = vec![0.0f64; n];

    for source in 0..n {
        let mut stack: Vec<usize> = Vec::new();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut distance = vec![-1i64; n];
        sigma[source] = 1.0;
        distance[source] = 0;

        let mut queue = VecDeque::from([source]);
        while let Some(current) = queue.pop_front() {
            stack.push(current);
            for &next in &adjacency[current] {
                if distance[next] < 0 {
                    distance[next] = distance[current] + 1;
                    queue.push_back(next);
                }
                if distance[next] == distance[current] + 1 {
                    sigma[next] += sigma[current];
                    predecessors[next].push(current);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(node) = stack.pop() {
            for &previous in &predecessors[node] {
                delta[previous] += sigma[previous] / sigma[node] * (1.0 + delta[node]);
            }
            if node != source {
                scores[node] += delta[node];
            }
        }
    }

    let scale = 1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
    for score in &mut scores {
        *score *= scale;
    }
    scores
}

/// Closeness over incoming shortest-path distances, scaled by the
/// reached fraction so small components rank lower. Nodes nothing
/// reaches score 0.
fn closeness_scores(graph: &KnowledgeGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }

    let adjacency = directed_adjacency(graph, Direction::Incoming);
    let mut scores = vec![0.0f64; n];

    for node in 0..n {
        let mut distance = vec![-1i64; n];
        distance[node] = 0;
        let mut total = 0i64;
        let mut reached = 1usize;

        let mut queue = VecDeque::from([node]);
        while let Some(current) = queue.pop_front() {
            for &next in &adjacency[current] {
                if distance[next] < 0 {
                    distance[next] = distance[current] + 1;
                    total += distance[next];
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        if total > 0 {
            let fraction = (reached as f64 - 1.0) / (n as f64 - 1.0);
            scores[node] = (reached as f64 - 1.0) / total as f64 * fraction;
        }
    }
    scores
}

/// Distinct-neighbor adjacency lists in the given direction, self-loops
/// dropped, indexed by node position.
fn directed_adjacency(graph: &KnowledgeGraph, direction: Direction) -> Vec<Vec<usize>> {
    let inner = graph.graph();
    let mut adjacency = vec![Vec::new(); inner.node_count()];

    for index in inner.node_indices() {
        let mut seen: HashSet<usize> = HashSet::new();
        let mut neighbors = Vec::new();
        for edge in inner.edges_directed(index, direction) {
            let other = match direction {
                Direction::Outgoing => edge.target().index(),
                Direction::Incoming => edge.source().index(),
            };
            if other == index.index() {
                continue;
            }
            if seen.insert(other) {
                neighbors.push(other);
            }
        }
        adjacency[index.index()] = neighbors;
    }
    adjacency
}
