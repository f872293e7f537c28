//! Theme and keyword neighborhood queries.

use crate::types::{
    CoOccurringKeyword, KeywordCoOccurrence, PublicationSummary, ThemeConnections, ThemeRef,
};
use litmap_graph::{node_id, KnowledgeGraph, NodeKind, Relation};
use std::collections::{HashMap, HashSet};

/// Publications carrying a theme, plus every other theme those
/// publications also carry. `None` when the theme name is unknown.
pub fn theme_connections(graph: &KnowledgeGraph, theme: &str) -> Option<ThemeConnections> {
    let theme_id = node_id(NodeKind::Theme, theme);
    graph.index_of(&theme_id)?;

    // one entry per has_theme edge, in insertion order
    let mut publications: Vec<PublicationSummary> = Vec::new();
    for edge in graph.edges_by_relation(Relation::HasTheme) {
        if edge.target != theme_id {
            continue;
        }
        if let Some(node) = graph.node(&edge.source) {
            publications.push(PublicationSummary::from(node));
        }
    }

    let publication_ids: HashSet<&str> = publications.iter().map(|p| p.id.as_str()).collect();
    let mut related_themes: Vec<ThemeRef> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for edge in graph.edges_by_relation(Relation::HasTheme) {
        if edge.target == theme_id || !publication_ids.contains(edge.source.as_str()) {
            continue;
        }
        if seen.insert(edge.target.as_str()) {
            related_themes.push(ThemeRef {
                id: edge.target.clone(),
                name: label_or_id(graph, &edge.target),
            });
        }
    }

    let publication_count = publications.len();
    Some(ThemeConnections {
        theme: theme.to_string(),
        publications,
        related_themes,
        publication_count,
    })
}

/// Keywords appearing on the same publications as the given keyword,
/// counted per shared edge and sorted by count descending. Entries below
/// `min_count` are dropped. `None` when the keyword name is unknown.
pub fn keyword_co_occurrence(
    graph: &KnowledgeGraph,
    keyword: &str,
    min_count: usize,
) -> Option<KeywordCoOccurrence> {
    let keyword_id = node_id(NodeKind::Keyword, keyword);
    graph.index_of(&keyword_id)?;

    // every has_keyword edge into the queried keyword counts, so a
    // publication tagged twice contributes twice
    let mut multiplicity: HashMap<&str, usize> = HashMap::new();
    let mut total_publications = 0usize;
    for edge in graph.edges_by_relation(Relation::HasKeyword) {
        if edge.target == keyword_id {
            *multiplicity.entry(edge.source.as_str()).or_default() += 1;
            total_publications += 1;
        }
    }

    let mut co_occurring: Vec<CoOccurringKeyword> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for edge in graph.edges_by_relation(Relation::HasKeyword) {
        if edge.target == keyword_id {
            continue;
        }
        let Some(&times) = multiplicity.get(edge.source.as_str()) else {
            continue;
        };
        match positions.get(edge.target.as_str()) {
            Some(&position) => co_occurring[position].co_occurrence_count += times,
            None => {
                positions.insert(edge.target.as_str(), co_occurring.len());
                co_occurring.push(CoOccurringKeyword {
                    id: edge.target.clone(),
                    name: label_or_id(graph, &edge.target),
                    co_occurrence_count: times,
                });
            }
        }
    }

    co_occurring.retain(|entry| entry.co_occurrence_count >= min_count);
    co_occurring.sort_by(|a, b| b.co_occurrence_count.cmp(&a.co_occurrence_count));

    Some(KeywordCoOccurrence {
        keyword: keyword.to_string(),
        co_occurring_keywords: co_occurring,
        total_publications,
    })
}

fn label_or_id(graph: &KnowledgeGraph, id: &str) -> String {
    graph
        .node(id)
        .map(|node| node.label.clone())
        .unwrap_or_else(|| id.to_string())
}
