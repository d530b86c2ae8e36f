//! Knowledge Editor
//!
//! Validated add / edit / delete / filter over an in-memory collection.
//! Callers persist the result with `KnowledgeStore::save`; nothing here
//! touches storage.

use super::schema::{KnowledgeCollection, KnowledgeEntry};
use chrono::Utc;

/// Prefix for ids of entries created through the editor
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Validation failures for editor operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("information must not be empty")]
    EmptyInformation,

    #[error("no entry with id '{0}'")]
    UnknownId(String),
}

/// Append a new entry with a generated `custom-<millis>` id.
/// Topic and information are trimmed and must not be empty.
pub fn add_entry<'a>(
    entries: &'a mut KnowledgeCollection,
    topic: &str,
    information: &str,
) -> Result<&'a KnowledgeEntry, EntryError> {
    let topic = require_text(topic, EntryError::EmptyTopic)?;
    let information = require_text(information, EntryError::EmptyInformation)?;

    let id = next_custom_id(entries, Utc::now().timestamp_millis());
    entries.push(KnowledgeEntry::new(id, topic, information));
    Ok(&entries[entries.len() - 1])
}

/// Update the topic and/or information of the entry with `id`.
/// `None` keeps the current value; provided values are trimmed and must not
/// be empty. The entry keeps its id and position.
pub fn update_entry<'a>(
    entries: &'a mut KnowledgeCollection,
    id: &str,
    topic: Option<&str>,
    information: Option<&str>,
) -> Result<&'a KnowledgeEntry, EntryError> {
    let topic = topic
        .map(|t| require_text(t, EntryError::EmptyTopic))
        .transpose()?;
    let information = information
        .map(|i| require_text(i, EntryError::EmptyInformation))
        .transpose()?;

    let entry = entries
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| EntryError::UnknownId(id.to_string()))?;

    if let Some(topic) = topic {
        entry.topic = topic;
    }
    if let Some(information) = information {
        entry.information = information;
    }
    Ok(entry)
}

/// Remove and return the entry with `id`
pub fn delete_entry(entries: &mut KnowledgeCollection, id: &str) -> Result<KnowledgeEntry, EntryError> {
    let index = entries
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| EntryError::UnknownId(id.to_string()))?;
    Ok(entries.remove(index))
}

/// Entries whose topic or information contains `filter`, case-insensitive.
/// An empty filter keeps everything.
pub fn filter_entries<'a>(entries: &'a [KnowledgeEntry], filter: &str) -> Vec<&'a KnowledgeEntry> {
    let needle = filter.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.topic.to_lowercase().contains(&needle) || e.information.to_lowercase().contains(&needle)
        })
        .collect()
}

fn require_text(value: &str, err: EntryError) -> Result<String, EntryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

/// `custom-<millis>`, bumped until it does not collide with an existing id
fn next_custom_id(entries: &[KnowledgeEntry], now_ms: i64) -> String {
    let mut stamp = now_ms;
    loop {
        let id = format!("{}{}", CUSTOM_ID_PREFIX, stamp);
        if !entries.iter().any(|e| e.id == id) {
            return id;
        }
        stamp += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::defaults::default_knowledge_base;

    #[test]
    fn test_add_trims_and_generates_id() {
        let mut entries = default_knowledge_base();
        let added = add_entry(&mut entries, "  Canteen hours ", "\tNoon to two\n")
            .unwrap()
            .clone();

        assert!(added.id.starts_with(CUSTOM_ID_PREFIX));
        assert_eq!(added.topic, "Canteen hours");
        assert_eq!(added.information, "Noon to two");
        assert_eq!(entries.last(), Some(&added));
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let mut entries = KnowledgeCollection::new();
        assert_eq!(add_entry(&mut entries, "   ", "info"), Err(EntryError::EmptyTopic));
        assert_eq!(add_entry(&mut entries, "topic", ""), Err(EntryError::EmptyInformation));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut entries = KnowledgeCollection::new();
        for i in 0..5 {
            add_entry(&mut entries, &format!("Topic {}", i), "Info").unwrap();
        }
        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_next_custom_id_skips_collisions() {
        let entries = vec![
            KnowledgeEntry::new("custom-100", "a", "b"),
            KnowledgeEntry::new("custom-101", "c", "d"),
        ];
        assert_eq!(next_custom_id(&entries, 100), "custom-102");
        assert_eq!(next_custom_id(&entries, 50), "custom-50");
    }

    #[test]
    fn test_update_partial_fields() {
        let mut entries = default_knowledge_base();
        let updated = update_entry(&mut entries, "lib1", None, Some(" Fifth floor ")).unwrap();
        assert_eq!(updated.topic, "Where is the library?");
        assert_eq!(updated.information, "Fifth floor");

        let position = entries.iter().position(|e| e.id == "lib1").unwrap();
        assert_eq!(position, 19);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let mut entries = default_knowledge_base();
        assert_eq!(
            update_entry(&mut entries, "lib1", Some(" "), None),
            Err(EntryError::EmptyTopic)
        );
        assert_eq!(
            update_entry(&mut entries, "missing", Some("Topic"), None),
            Err(EntryError::UnknownId("missing".to_string()))
        );
        assert_eq!(entries, default_knowledge_base());
    }

    #[test]
    fn test_delete_entry() {
        let mut entries = default_knowledge_base();
        let removed = delete_entry(&mut entries, "gen3").unwrap();
        assert_eq!(removed.id, "gen3");
        assert_eq!(entries.len(), 21);
        assert!(entries.iter().all(|e| e.id != "gen3"));

        assert_eq!(
            delete_entry(&mut entries, "gen3"),
            Err(EntryError::UnknownId("gen3".to_string()))
        );
    }

    #[test]
    fn test_filter_case_insensitive_over_both_fields() {
        let entries = default_knowledge_base();

        let by_topic: Vec<&str> = filter_entries(&entries, "LIBRARY").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(by_topic, vec!["lib1", "lib2"]);

        let by_information: Vec<&str> = filter_entries(&entries, "fourth floor").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(by_information, vec!["lib1"]);

        assert_eq!(filter_entries(&entries, "").len(), entries.len());
        assert!(filter_entries(&entries, "zzz").is_empty());
    }
}
