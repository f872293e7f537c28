//! Property-based tests for graph construction.
//!
//! Invariants that must hold for any record sequence:
//! - every edge endpoint exists in the node index
//! - co-authorship edge counts follow the per-record pair formula
//! - the persisted document round-trips without losing content

use litmap_graph::{GraphDocument, Relation};
use litmap_ingest::{GraphBuilder, PublicationRecord};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,11}"
}

/// Mostly real names, occasionally the blank ones the builder must skip.
fn arb_author() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_name(),
        1 => Just("   ".to_string()),
        1 => Just(String::new()),
    ]
}

prop_compose! {
    fn arb_record()(
        index in 0..500i64,
        title in "[A-Za-z0-9 ]{1,40}",
        authors in proptest::collection::vec(arb_author(), 0..5),
        keywords in proptest::collection::vec(arb_name(), 0..4),
        journal in proptest::option::of(arb_name()),
        theme in proptest::option::of(arb_name()),
    ) -> PublicationRecord {
        PublicationRecord {
            index,
            title,
            authors,
            keywords,
            journal,
            theme,
            ..Default::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn no_dangling_edges(records in proptest::collection::vec(arb_record(), 0..12)) {
        let graph = GraphBuilder::build(&records).unwrap();
        for edge in graph.edges() {
            prop_assert!(graph.contains(&edge.source), "dangling source {}", edge.source);
            prop_assert!(graph.contains(&edge.target), "dangling target {}", edge.target);
        }
    }

    #[test]
    fn co_author_edges_follow_pair_counts(
        records in proptest::collection::vec(arb_record(), 0..10),
    ) {
        let graph = GraphBuilder::build(&records).unwrap();

        // blank author entries are skipped before pairing, everything else
        // pairs up, duplicates and collisions included
        let expected: usize = records
            .iter()
            .map(|record| {
                let k = record
                    .authors
                    .iter()
                    .filter(|author| !author.trim().is_empty())
                    .count();
                if k < 2 {
                    0
                } else {
                    k * (k - 1) / 2
                }
            })
            .sum();
        prop_assert_eq!(graph.relation_count(Relation::CoAuthors), expected);
    }

    #[test]
    fn shared_publications_accumulate_parallel_edges(n in 1usize..8) {
        let records: Vec<PublicationRecord> = (0..n)
            .map(|i| PublicationRecord {
                index: i as i64,
                title: format!("T{i}"),
                authors: vec!["A".into(), "B".into()],
                ..Default::default()
            })
            .collect();
        let graph = GraphBuilder::build(&records).unwrap();
        prop_assert_eq!(graph.relation_count(Relation::CoAuthors), n);
    }

    #[test]
    fn document_round_trip_preserves_content(
        records in proptest::collection::vec(arb_record(), 0..10),
    ) {
        let original = GraphBuilder::build(&records).unwrap();
        let text = GraphDocument::from_graph(&original, serde_json::Value::Null)
            .to_json()
            .unwrap();
        let restored = GraphDocument::from_json(&text).unwrap().into_graph().unwrap();

        prop_assert_eq!(restored.node_count(), original.node_count());
        prop_assert_eq!(restored.edge_count(), original.edge_count());
        for relation in Relation::all() {
            prop_assert_eq!(
                restored.relation_count(*relation),
                original.relation_count(*relation)
            );
        }
        for node in original.nodes() {
            prop_assert_eq!(restored.node(&node.id), Some(node), "node {} changed", node.id);
        }
    }
}
