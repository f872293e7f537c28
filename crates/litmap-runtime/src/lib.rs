//! litmap Runtime — build-freeze-serve lifecycle over the publication graph.
//!
//! Owns the swap-on-rebuild snapshot handle plus persisted-document
//! load/store wiring. Query traffic reads frozen snapshots and never
//! blocks behind a rebuild.

pub mod service;
pub mod types;

pub use service::GraphService;
pub use types::*;
