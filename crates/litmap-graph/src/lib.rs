//! litmap Graph — node/edge model, identifier derivation, petgraph store, document format.

pub mod document;
pub mod ident;
pub mod store;
pub mod types;

pub use document::GraphDocument;
pub use ident::{display_label, node_id, normalize_name, publication_id};
pub use store::KnowledgeGraph;
pub use types::{GraphEdge, GraphNode, NodeKind, PropertyMap, PropertyValue, Relation};
