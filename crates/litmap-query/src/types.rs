//! Query result types.

use litmap_graph::{GraphNode, NodeKind, PropertyMap, Relation};
use serde::Serialize;
use std::fmt;

/// Node entry in a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl From<&GraphNode> for NetworkNode {
    fn from(node: &GraphNode) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            kind: node.kind,
        }
    }
}

/// Edge entry in a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "relationship_type")]
    pub relation: Relation,
}

/// Collaboration neighborhood around one author.
#[derive(Debug, Clone, Serialize)]
pub struct CollaborationNetwork {
    pub author_name: String,
    pub depth: usize,
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Publication reference carried by theme and profile results.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationSummary {
    pub id: String,
    pub title: String,
    pub properties: PropertyMap,
}

impl From<&GraphNode> for PublicationSummary {
    fn from(node: &GraphNode) -> Self {
        Self {
            id: node.id.clone(),
            title: node.label.clone(),
            properties: node.properties.clone(),
        }
    }
}

/// Theme reference in a theme-connections result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRef {
    pub id: String,
    pub name: String,
}

/// Publications carrying a theme, plus themes adjacent through them.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConnections {
    pub theme: String,
    pub publications: Vec<PublicationSummary>,
    pub related_themes: Vec<ThemeRef>,
    pub publication_count: usize,
}

/// One co-occurring keyword with its tally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoOccurringKeyword {
    pub id: String,
    pub name: String,
    pub co_occurrence_count: usize,
}

/// Keywords sharing publications with the queried keyword.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordCoOccurrence {
    pub keyword: String,
    pub co_occurring_keywords: Vec<CoOccurringKeyword>,
    pub total_publications: usize,
}

/// Shortest path between two nodes over the undirected view.
/// `path_length` is `-1` and `path` empty when no path exists.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPath {
    pub source: String,
    pub target: String,
    pub path: Vec<NetworkNode>,
    pub path_length: i64,
}

/// Which centrality measure to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityKind {
    Degree,
    Betweenness,
    Closeness,
}

impl CentralityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Betweenness => "betweenness",
            Self::Closeness => "closeness",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "degree" => Some(Self::Degree),
            "betweenness" => Some(Self::Betweenness),
            "closeness" => Some(Self::Closeness),
            _ => None,
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scored node in a centrality ranking.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityEntry {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub score: f64,
}

/// Everything known about one author.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorProfile {
    pub author_name: String,
    pub publications: Vec<PublicationSummary>,
    pub co_authors: Vec<String>,
    pub publication_count: usize,
    pub collaboration_count: usize,
}

/// One label-search match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub properties: PropertyMap,
}

/// Label-search outcome; `total_found` counts matches before truncation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub total_found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_wire_shapes() {
        let node = NetworkNode {
            id: "author_a".into(),
            label: "A".into(),
            kind: NodeKind::Author,
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            serde_json::json!({"id": "author_a", "label": "A", "type": "author"})
        );

        let edge = NetworkEdge {
            source: "author_a".into(),
            target: "author_b".into(),
            relation: Relation::CoAuthors,
        };
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            serde_json::json!({
                "source": "author_a",
                "target": "author_b",
                "relationship_type": "co_authors"
            })
        );
    }

    #[test]
    fn test_centrality_kind_parse() {
        assert_eq!(CentralityKind::parse("degree"), Some(CentralityKind::Degree));
        assert_eq!(
            CentralityKind::parse("betweenness"),
            Some(CentralityKind::Betweenness)
        );
        assert!(CentralityKind::parse("pagerank").is_none());
        assert_eq!(CentralityKind::Closeness.to_string(), "closeness");
    }
}
