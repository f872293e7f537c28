//! Node and edge model for the publication graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of node in the publication graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Publication,
    Author,
    Journal,
    Theme,
    Keyword,
}

impl NodeKind {
    /// All node kinds, in a fixed reporting order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Publication,
            Self::Author,
            Self::Journal,
            Self::Theme,
            Self::Keyword,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Publication => "publication",
            Self::Author => "author",
            Self::Journal => "journal",
            Self::Theme => "theme",
            Self::Keyword => "keyword",
        }
    }

    /// Identifier prefix for nodes of this kind (`author_...`, `pub_0`).
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Publication => "pub",
            Self::Author => "author",
            Self::Journal => "journal",
            Self::Theme => "theme",
            Self::Keyword => "keyword",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "publication" => Some(Self::Publication),
            "author" => Some(Self::Author),
            "journal" => Some(Self::Journal),
            "theme" => Some(Self::Theme),
            "keyword" => Some(Self::Keyword),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relationship kind carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    AuthoredBy,
    PublishedIn,
    HasTheme,
    HasKeyword,
    CoAuthors,
}

impl Relation {
    /// All relation kinds, in a fixed reporting order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::AuthoredBy,
            Self::PublishedIn,
            Self::HasTheme,
            Self::HasKeyword,
            Self::CoAuthors,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthoredBy => "authored_by",
            Self::PublishedIn => "published_in",
            Self::HasTheme => "has_theme",
            Self::HasKeyword => "has_keyword",
            Self::CoAuthors => "co_authors",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "authored_by" => Some(Self::AuthoredBy),
            "published_in" => Some(Self::PublishedIn),
            "has_theme" => Some(Self::HasTheme),
            "has_keyword" => Some(Self::HasKeyword),
            "co_authors" => Some(Self::CoAuthors),
            _ => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Property value union. Only these shapes ever appear on nodes or edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

/// Ordered property map. Absent keys are simply not stored, never null.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

fn default_weight() -> f64 {
    1.0
}

/// A node in the publication graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            properties: PropertyMap::new(),
            weight: 1.0,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A directed edge in the publication graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "relationship_type")]
    pub relation: Relation,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, relation: Relation) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation,
            weight: 1.0,
            properties: PropertyMap::new(),
        }
    }
}
