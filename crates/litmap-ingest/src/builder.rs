//! Graph construction from publication records.

use crate::record::PublicationRecord;
use litmap_core::Result;
use litmap_graph::{
    display_label, node_id, publication_id, GraphEdge, GraphNode, KnowledgeGraph, NodeKind,
    Relation,
};
use tracing::{debug, info, warn};

/// Builds a fresh graph from a batch of extracted records.
///
/// Entity nodes are created on first sight and reused afterwards, so the
/// first raw spelling of a name wins the display label. No edge is ever
/// deduplicated.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Build a graph from publication records, then derive co-authorship.
    pub fn build(records: &[PublicationRecord]) -> Result<KnowledgeGraph> {
        info!("Building publication graph from {} records", records.len());
        if records.is_empty() {
            warn!("No publication records supplied, graph will be empty");
        }

        let mut graph = KnowledgeGraph::new();
        // author ids per publication, in record order; pair derivation
        // below depends on that order
        let mut publication_authors: Vec<Vec<String>> = Vec::with_capacity(records.len());

        for record in records {
            let authors = Self::add_publication(&mut graph, record)?;
            publication_authors.push(authors);
        }

        Self::derive_co_authorship(&mut graph, &publication_authors)?;

        info!(
            "Publication graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn add_publication(
        graph: &mut KnowledgeGraph,
        record: &PublicationRecord,
    ) -> Result<Vec<String>> {
        let pub_id = publication_id(record.index);

        let mut node = GraphNode::new(&pub_id, display_label(&record.title), NodeKind::Publication)
            .with_property("title", record.title.as_str());
        if let Some(text) = &record.abstract_text {
            node = node.with_property("abstract", text.as_str());
        }
        if let Some(text) = &record.summary {
            node = node.with_property("summary", text.as_str());
        }
        if let Some(text) = &record.impact {
            node = node.with_property("impact", text.as_str());
        }
        if let Some(text) = &record.doi {
            node = node.with_property("doi", text.as_str());
        }
        if let Some(text) = &record.publication_date {
            node = node.with_property("publication_date", text.as_str());
        }
        if let Some(text) = &record.url {
            node = node.with_property("url", text.as_str());
        }
        graph.add_node(node);

        let mut author_ids = Vec::new();
        for author in &record.authors {
            if author.trim().is_empty() {
                warn!("Skipping blank author name in record {}", record.index);
                continue;
            }
            let author_id = node_id(NodeKind::Author, author);
            if !graph.contains(&author_id) {
                graph.add_node(
                    GraphNode::new(&author_id, author.clone(), NodeKind::Author)
                        .with_property("name", author.as_str()),
                );
            }
            graph.add_edge(GraphEdge::new(&pub_id, &author_id, Relation::AuthoredBy))?;
            author_ids.push(author_id);
        }

        if let Some(journal) = record.journal.as_deref().filter(|name| !name.is_empty()) {
            let journal_id = node_id(NodeKind::Journal, journal);
            if !graph.contains(&journal_id) {
                graph.add_node(
                    GraphNode::new(&journal_id, journal, NodeKind::Journal)
                        .with_property("name", journal),
                );
            }
            graph.add_edge(GraphEdge::new(&pub_id, &journal_id, Relation::PublishedIn))?;
        }

        if let Some(theme) = record.theme.as_deref().filter(|name| !name.is_empty()) {
            let theme_id = node_id(NodeKind::Theme, theme);
            if !graph.contains(&theme_id) {
                graph.add_node(
                    GraphNode::new(&theme_id, theme, NodeKind::Theme).with_property("name", theme),
                );
            }
            graph.add_edge(GraphEdge::new(&pub_id, &theme_id, Relation::HasTheme))?;
        }

        for keyword in &record.keywords {
            if keyword.trim().is_empty() {
                warn!("Skipping blank keyword in record {}", record.index);
                continue;
            }
            let keyword_id = node_id(NodeKind::Keyword, keyword);
            if !graph.contains(&keyword_id) {
                graph.add_node(
                    GraphNode::new(&keyword_id, keyword.clone(), NodeKind::Keyword)
                        .with_property("name", keyword.as_str()),
                );
            }
            graph.add_edge(GraphEdge::new(&pub_id, &keyword_id, Relation::HasKeyword))?;
        }

        Ok(author_ids)
    }

    /// Second pass: one directed `co_authors` edge per ordered pair `(i, j)`
    /// with `i < j` in each publication's author list. Pairs sharing several
    /// publications accumulate parallel edges.
    fn derive_co_authorship(
        graph: &mut KnowledgeGraph,
        publication_authors: &[Vec<String>],
    ) -> Result<()> {
        let mut added = 0usize;
        for authors in publication_authors {
            for i in 0..authors.len() {
                for j in (i + 1)..authors.len() {
                    graph.add_edge(GraphEdge::new(
                        &authors[i],
                        &authors[j],
                        Relation::CoAuthors,
                    ))?;
                    added += 1;
                }
            }
        }
        debug!("Derived {} co-authorship edges", added);
        Ok(())
    }
}
