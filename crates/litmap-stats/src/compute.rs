//! Statistics computation over a built graph.

use crate::types::{CollaborationStats, GraphStatistics, RankedEntry};
use litmap_graph::{KnowledgeGraph, NodeKind, Relation};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::info;

/// Derives the statistics snapshot from a completed graph.
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Compute the full snapshot. `top_n` caps the author and journal
    /// rankings; the theme distribution is never truncated.
    pub fn compute(graph: &KnowledgeGraph, top_n: usize) -> GraphStatistics {
        let start = std::time::Instant::now();

        let mut node_types = BTreeMap::new();
        for node in graph.nodes() {
            *node_types.entry(node.kind.as_str().to_string()).or_insert(0) += 1;
        }

        let mut edge_types = BTreeMap::new();
        for relation in Relation::all() {
            let count = graph.relation_count(*relation);
            if count > 0 {
                edge_types.insert(relation.as_str().to_string(), count);
            }
        }

        let stats = GraphStatistics {
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
            node_types,
            edge_types,
            most_connected_authors: Self::most_connected_authors(graph, top_n),
            most_productive_journals: Self::most_productive_journals(graph, top_n),
            theme_distribution: Self::theme_distribution(graph),
            collaboration_network_stats: Self::collaboration_stats(graph),
        };

        info!(
            "Statistics computed: {} nodes, {} edges, {} collaboration components, {}ms",
            stats.total_nodes,
            stats.total_edges,
            stats.collaboration_network_stats.connected_components,
            start.elapsed().as_millis()
        );
        stats
    }

    /// Authors ranked by incident `co_authors` edge count. Both endpoints of
    /// every edge count, so a self-loop counts twice for its author.
    fn most_connected_authors(graph: &KnowledgeGraph, top_n: usize) -> Vec<RankedEntry> {
        let ids = graph
            .edges_by_relation(Relation::CoAuthors)
            .flat_map(|edge| [edge.source.as_str(), edge.target.as_str()]);
        let mut entries = ranked_tally(ids);
        entries.truncate(top_n);
        entries
    }

    /// Journals ranked by incoming `published_in` edge count.
    fn most_productive_journals(graph: &KnowledgeGraph, top_n: usize) -> Vec<RankedEntry> {
        let ids = graph
            .edges_by_relation(Relation::PublishedIn)
            .map(|edge| edge.target.as_str());
        let mut entries = ranked_tally(ids);
        entries.truncate(top_n);
        entries
    }

    /// Every theme with its `has_theme` count, descending.
    fn theme_distribution(graph: &KnowledgeGraph) -> Vec<RankedEntry> {
        let ids = graph
            .edges_by_relation(Relation::HasTheme)
            .map(|edge| edge.target.as_str());
        ranked_tally(ids)
    }

    /// Metrics over the author projection: author nodes plus `co_authors`
    /// edges, collapsed to a simple undirected graph. Self-loops drop out of
    /// the projection; components and clustering never see them.
    fn collaboration_stats(graph: &KnowledgeGraph) -> CollaborationStats {
        let author_index: HashMap<&str, usize> = graph
            .nodes()
            .filter(|node| node.kind == NodeKind::Author)
            .enumerate()
            .map(|(position, node)| (node.id.as_str(), position))
            .collect();
        let total_authors = author_index.len();
        if total_authors == 0 {
            return CollaborationStats::default();
        }

        let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); total_authors];
        for edge in graph.edges_by_relation(Relation::CoAuthors) {
            let (Some(&a), Some(&b)) = (
                author_index.get(edge.source.as_str()),
                author_index.get(edge.target.as_str()),
            ) else {
                continue;
            };
            if a == b {
                continue;
            }
            adjacency[a].insert(b);
            adjacency[b].insert(a);
        }

        let (connected_components, largest_component_size) = component_counts(&adjacency);

        CollaborationStats {
            total_authors,
            connected_components,
            largest_component_size,
            average_clustering: average_clustering(&adjacency),
        }
    }
}

/// Tally ids preserving first-encounter order, then rank by descending
/// count. The sort is stable, so ties keep first-encounter order.
fn ranked_tally<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<RankedEntry> {
    let mut order: Vec<&'a str> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for id in ids {
        match counts.entry(id) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
                order.push(id);
            }
        }
    }

    let mut entries: Vec<RankedEntry> = order
        .into_iter()
        .map(|id| RankedEntry {
            id: id.to_string(),
            count: counts[id],
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Component count and largest component size via union-find.
fn component_counts(adjacency: &[BTreeSet<usize>]) -> (usize, usize) {
    let n = adjacency.len();
    if n == 0 {
        return (0, 0);
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = vec![0; n];
    for (node, neighbors) in adjacency.iter().enumerate() {
        for &other in neighbors {
            uf_union(&mut parent, &mut rank, node, other);
        }
    }

    let mut sizes: HashMap<usize, usize> = HashMap::new();
    for node in 0..n {
        let root = uf_find(&mut parent, node);
        *sizes.entry(root).or_insert(0) += 1;
    }
    let largest = sizes.values().copied().max().unwrap_or(0);
    (sizes.len(), largest)
}

fn uf_find(parent: &mut [usize], node: usize) -> usize {
    if parent[node] != node {
        parent[node] = uf_find(parent, parent[node]);
    }
    parent[node]
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let root_a = uf_find(parent, a);
    let root_b = uf_find(parent, b);
    if root_a == root_b {
        return;
    }
    match rank[root_a].cmp(&rank[root_b]) {
        Ordering::Less => parent[root_a] = root_b,
        Ordering::Greater => parent[root_b] = root_a,
        Ordering::Equal => {
            parent[root_b] = root_a;
            rank[root_a] += 1;
        }
    }
}

/// Mean local clustering coefficient over every node of the projection.
/// Nodes with fewer than two neighbors contribute zero.
fn average_clustering(adjacency: &[BTreeSet<usize>]) -> f64 {
    if adjacency.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for neighbors in adjacency {
        let degree = neighbors.len();
        if degree < 2 {
            continue;
        }
        let members: Vec<usize> = neighbors.iter().copied().collect();
        let mut links = 0usize;
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if adjacency[*a].contains(b) {
                    links += 1;
                }
            }
        }
        total += (2 * links) as f64 / (degree * (degree - 1)) as f64;
    }
    total / adjacency.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use litmap_ingest::{GraphBuilder, PublicationRecord};

    fn record(index: i64, title: &str, authors: &[&str]) -> PublicationRecord {
        PublicationRecord {
            index,
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    fn build(records: &[PublicationRecord]) -> KnowledgeGraph {
        GraphBuilder::build(records).unwrap()
    }

    #[test]
    fn test_empty_graph_statistics() {
        let stats = StatisticsEngine::compute(&build(&[]), 10);

        assert_eq!(stats.total_nodes, 0);
        assert_eq!(stats.total_edges, 0);
        assert!(stats.node_types.is_empty());
        assert!(stats.edge_types.is_empty());
        assert!(stats.most_connected_authors.is_empty());
        assert_eq!(stats.collaboration_network_stats, CollaborationStats::default());
    }

    #[test]
    fn test_counts_by_kind_and_relation() {
        let records = vec![
            PublicationRecord {
                index: 0,
                title: "T1".into(),
                authors: vec!["A".into(), "B".into()],
                journal: Some("J".into()),
                theme: Some("X".into()),
                keywords: vec!["k1".into()],
                ..Default::default()
            },
            record(1, "T2", &["B"]),
        ];
        let stats = StatisticsEngine::compute(&build(&records), 10);

        assert_eq!(stats.node_types["publication"], 2);
        assert_eq!(stats.node_types["author"], 2);
        assert_eq!(stats.node_types["journal"], 1);
        assert_eq!(stats.edge_types["authored_by"], 3);
        assert_eq!(stats.edge_types["co_authors"], 1);
        assert_eq!(stats.edge_types["published_in"], 1);
        assert_eq!(stats.edge_types["has_keyword"], 1);
    }

    #[test]
    fn test_most_connected_authors_ranking() {
        let records = vec![
            record(0, "T1", &["A", "B"]),
            record(1, "T2", &["A", "C"]),
            record(2, "T3", &["A", "D"]),
        ];
        let stats = StatisticsEngine::compute(&build(&records), 10);

        let ranked: Vec<_> = stats
            .most_connected_authors
            .iter()
            .map(|entry| (entry.id.as_str(), entry.count))
            .collect();
        // ties keep first-encounter order behind the leader
        assert_eq!(
            ranked,
            vec![("author_a", 3), ("author_b", 1), ("author_c", 1), ("author_d", 1)]
        );
    }

    #[test]
    fn test_ranking_truncated_to_top_n() {
        let records = vec![record(0, "T1", &["A", "B", "C", "D"])];
        let stats = StatisticsEngine::compute(&build(&records), 2);
        assert_eq!(stats.most_connected_authors.len(), 2);
    }

    #[test]
    fn test_journal_and_theme_rankings() {
        let records = vec![
            PublicationRecord {
                index: 0,
                title: "T0".into(),
                journal: Some("Big Journal".into()),
                theme: Some("Popular".into()),
                ..Default::default()
            },
            PublicationRecord {
                index: 1,
                title: "T1".into(),
                journal: Some("Big Journal".into()),
                theme: Some("Popular".into()),
                ..Default::default()
            },
            PublicationRecord {
                index: 2,
                title: "T2".into(),
                journal: Some("Small Journal".into()),
                theme: Some("Niche".into()),
                ..Default::default()
            },
        ];
        let stats = StatisticsEngine::compute(&build(&records), 10);

        assert_eq!(stats.most_productive_journals[0].id, "journal_big_journal");
        assert_eq!(stats.most_productive_journals[0].count, 2);
        assert_eq!(stats.theme_distribution[0].id, "theme_popular");
        assert_eq!(stats.theme_distribution[1].id, "theme_niche");
    }

    #[test]
    fn test_collaboration_components() {
        let records = vec![
            record(0, "T1", &["A", "B"]),
            record(1, "T2", &["C", "D"]),
            record(2, "T3", &["E"]),
        ];
        let stats = StatisticsEngine::compute(&build(&records), 10);
        let collab = &stats.collaboration_network_stats;

        assert_eq!(collab.total_authors, 5);
        assert_eq!(collab.connected_components, 3);
        assert_eq!(collab.largest_component_size, 2);
        assert_eq!(collab.average_clustering, 0.0);
    }

    #[test]
    fn test_clustering_full_triangle() {
        let records = vec![record(0, "T1", &["A", "B", "C"])];
        let stats = StatisticsEngine::compute(&build(&records), 10);
        let collab = &stats.collaboration_network_stats;

        assert_eq!(collab.connected_components, 1);
        assert_eq!(collab.largest_component_size, 3);
        assert!((collab.average_clustering - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_loop_counted_for_ranking_not_projection() {
        let records = vec![record(0, "T1", &["A", "A"])];
        let stats = StatisticsEngine::compute(&build(&records), 10);

        assert_eq!(stats.most_connected_authors[0].id, "author_a");
        assert_eq!(stats.most_connected_authors[0].count, 2);

        let collab = &stats.collaboration_network_stats;
        assert_eq!(collab.total_authors, 1);
        assert_eq!(collab.connected_components, 1);
        assert_eq!(collab.largest_component_size, 1);
        assert_eq!(collab.average_clustering, 0.0);
    }

    #[test]
    fn test_statistics_serde_shape() {
        let records = vec![record(0, "T1", &["A", "B"])];
        let stats = StatisticsEngine::compute(&build(&records), 10);
        let json = serde_json::to_value(&stats).unwrap();

        assert!(json["node_types"].is_object());
        assert!(json["most_connected_authors"].is_array());
        assert!(json["collaboration_network_stats"]["total_authors"].is_number());
    }
}
