//! Author profiles and label search.

use crate::types::{AuthorProfile, PublicationSummary, SearchHit, SearchResults};
use litmap_graph::{node_id, KnowledgeGraph, NodeKind, Relation};
use std::cmp::Reverse;

/// Publications and collaborators of one author, looked up by raw name.
/// `None` when the normalized name is unknown.
pub fn author_profile(graph: &KnowledgeGraph, author_name: &str) -> Option<AuthorProfile> {
    let author_id = node_id(NodeKind::Author, author_name);
    graph.index_of(&author_id)?;

    let mut publications: Vec<PublicationSummary> = Vec::new();
    for edge in graph.edges_by_relation(Relation::AuthoredBy) {
        if edge.target != author_id {
            continue;
        }
        if let Some(node) = graph.node(&edge.source) {
            publications.push(PublicationSummary::from(node));
        }
    }

    // co_authors edges only run from the earlier-listed author, so read
    // both endpoints; self-loops from duplicate listings are not collaborators
    let mut co_authors: Vec<String> = Vec::new();
    for edge in graph.edges_by_relation(Relation::CoAuthors) {
        let other = if edge.source == author_id {
            &edge.target
        } else if edge.target == author_id {
            &edge.source
        } else {
            continue;
        };
        if *other == author_id {
            continue;
        }
        let Some(label) = graph.node(other).map(|node| node.label.clone()) else {
            continue;
        };
        if !co_authors.contains(&label) {
            co_authors.push(label);
        }
    }

    let publication_count = publications.len();
    let collaboration_count = co_authors.len();
    Some(AuthorProfile {
        author_name: author_name.to_string(),
        publications,
        co_authors,
        publication_count,
        collaboration_count,
    })
}

/// Case-insensitive substring search over node labels. Exact matches rank
/// first, then longer labels before shorter; `total_found` counts matches
/// before the `limit` cut.
pub fn search_nodes(
    graph: &KnowledgeGraph,
    query: &str,
    kind: Option<NodeKind>,
    limit: usize,
) -> SearchResults {
    let needle = query.to_lowercase();

    let mut results: Vec<SearchHit> = Vec::new();
    for node in graph.nodes() {
        if kind.is_some_and(|wanted| wanted != node.kind) {
            continue;
        }
        if node.label.to_lowercase().contains(&needle) {
            results.push(SearchHit {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind,
                properties: node.properties.clone(),
            });
        }
    }

    results.sort_by_key(|hit| {
        (
            hit.label.to_lowercase() != needle,
            Reverse(hit.label.chars().count()),
        )
    });

    let total_found = results.len();
    results.truncate(limit);
    SearchResults {
        query: needle,
        results,
        total_found,
    }
}
