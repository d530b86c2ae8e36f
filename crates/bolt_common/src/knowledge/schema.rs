//! Knowledge Base Schema
//!
//! Defines the persisted entry shape and the storage keys.

use serde::{Deserialize, Serialize};

/// Schema version of the built-in dataset. Bumping it reseeds every store.
pub const SCHEMA_VERSION: &str = "1.2";

/// Key holding the JSON array of entries
pub const DATA_STORAGE_KEY: &str = "schoolKnowledgeBase_data";

/// Key holding the schema version tag
pub const VERSION_STORAGE_KEY: &str = "schoolKnowledgeBase_version";

/// One topic/information pair in the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Opaque identifier, unique within a collection
    pub id: String,
    /// Question or subject the entry answers
    pub topic: String,
    /// Answer text returned to the user
    pub information: String,
}

impl KnowledgeEntry {
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        information: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            information: information.into(),
        }
    }
}

/// Ordered entries. Order is display order only; matching ignores it
/// except for tie-breaking.
pub type KnowledgeCollection = Vec<KnowledgeEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = KnowledgeEntry::new("lib1", "Where is the library?", "On the fourth floor");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], "lib1");
        assert_eq!(json["topic"], "Where is the library?");
        assert_eq!(json["information"], "On the fourth floor");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_stored_array() {
        let raw = r#"[{"id":"a","topic":"T","information":"I"}]"#;
        let entries: KnowledgeCollection = serde_json::from_str(raw).unwrap();
        assert_eq!(entries, vec![KnowledgeEntry::new("a", "T", "I")]);
    }
}
