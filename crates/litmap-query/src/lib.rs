//! litmap Query — structural queries over a built publication graph.
//!
//! Every query borrows the graph immutably and returns owned result
//! types; unknown names and ids come back as `None`, never as errors.

pub mod centrality;
pub mod network;
pub mod path;
pub mod profile;
pub mod topics;
pub mod types;

pub use centrality::centrality;
pub use network::collaboration_network;
pub use path::shortest_path;
pub use profile::{author_profile, search_nodes};
pub use topics::{keyword_co_occurrence, theme_connections};
pub use types::*;
