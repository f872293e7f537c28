//! litmap Stats — aggregate counts and collaboration metrics.

pub mod compute;
pub mod types;

pub use compute::StatisticsEngine;
pub use types::{CollaborationStats, GraphStatistics, RankedEntry};
