//! Publication record contract from the upstream extraction pipeline.

use serde::{Deserialize, Deserializer, Serialize};

/// One extracted publication. Everything except `index` and `title` is
/// optional; list fields tolerate explicit nulls from the upstream pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub index: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub authors: Vec<String>,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub keywords: Vec<String>,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let record: PublicationRecord =
            serde_json::from_str(r#"{"index": 3, "title": "T"}"#).unwrap();
        assert_eq!(record.index, 3);
        assert_eq!(record.title, "T");
        assert!(record.authors.is_empty());
        assert!(record.journal.is_none());
    }

    #[test]
    fn test_null_lists_become_empty() {
        let record: PublicationRecord =
            serde_json::from_str(r#"{"index": 0, "title": "T", "authors": null, "keywords": null}"#)
                .unwrap();
        assert!(record.authors.is_empty());
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_full_record() {
        let record: PublicationRecord = serde_json::from_str(
            r#"{
                "index": 1,
                "title": "Bone Loss in Microgravity",
                "authors": ["Smith, John", "Doe, Jane"],
                "abstract": "An abstract.",
                "summary": "A summary.",
                "impact": "High.",
                "doi": "10.1000/xyz",
                "publication_date": "2021-04-01",
                "url": "https://example.org/p/1",
                "journal": "Nature Medicine",
                "theme": "Bone Biology",
                "keywords": ["microgravity", "bone loss"]
            }"#,
        )
        .unwrap();
        assert_eq!(record.authors.len(), 2);
        assert_eq!(record.abstract_text.as_deref(), Some("An abstract."));
        assert_eq!(record.journal.as_deref(), Some("Nature Medicine"));
        assert_eq!(record.keywords.len(), 2);
    }
}
