//! litmap Ingest — record contract and graph builder.

pub mod builder;
pub mod record;

pub use builder::GraphBuilder;
pub use record::PublicationRecord;
