//! Deterministic identifier and display-label derivation.
//!
//! Identifiers are pure string functions of the raw name: distinct raw names
//! that normalize identically merge into one node. That collision behavior is
//! part of the data contract, not an accident to repair here.

use crate::types::NodeKind;

/// Longest display label before truncation kicks in.
const MAX_LABEL_CHARS: usize = 100;

/// Canonical form of a raw entity name: lowercase, commas stripped,
/// spaces replaced with underscores. Total over any input, including blank.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ',')
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Node id for a named entity: `{kind_prefix}_{normalize(name)}`.
pub fn node_id(kind: NodeKind, name: &str) -> String {
    format!("{}_{}", kind.prefix(), normalize_name(name))
}

/// Node id for a publication, keyed by its record index.
pub fn publication_id(index: i64) -> String {
    format!("pub_{index}")
}

/// Display form of a title, capped at 100 characters with an ellipsis marker.
pub fn display_label(title: &str) -> String {
    if title.chars().count() > MAX_LABEL_CHARS {
        let mut label: String = title.chars().take(MAX_LABEL_CHARS).collect();
        label.push_str("...");
        label
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Smith, John A."), "smith_john_a.");
        assert_eq!(normalize_name("Nature Medicine"), "nature_medicine");
        assert_eq!(normalize_name("ALREADY_LOWER"), "already_lower");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalize_collisions_merge() {
        // distinct raw spellings can share an id on purpose
        assert_eq!(normalize_name("Smith, John"), normalize_name("smith john"));
    }

    #[test]
    fn test_node_id_prefixes() {
        assert_eq!(node_id(NodeKind::Author, "Ada Lovelace"), "author_ada_lovelace");
        assert_eq!(node_id(NodeKind::Journal, "Cell"), "journal_cell");
        assert_eq!(node_id(NodeKind::Theme, "Bone Loss"), "theme_bone_loss");
        assert_eq!(node_id(NodeKind::Keyword, "Microgravity"), "keyword_microgravity");
    }

    #[test]
    fn test_publication_id() {
        assert_eq!(publication_id(0), "pub_0");
        assert_eq!(publication_id(17), "pub_17");
    }

    #[test]
    fn test_display_label_truncation() {
        let exactly = "t".repeat(100);
        assert_eq!(display_label(&exactly), exactly);

        let over = "t".repeat(101);
        let label = display_label(&over);
        assert_eq!(label.chars().count(), 103);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn test_display_label_counts_chars_not_bytes() {
        let title = "é".repeat(100);
        assert_eq!(display_label(&title), title);
    }
}
