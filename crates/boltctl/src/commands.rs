//! Command handlers for boltctl
//!
//! Every handler takes the store and an output sink so it can be driven
//! from tests with an in-memory backend and a byte buffer.

use crate::errors::UsageError;
use crate::output::{format_entry, ok, section, THIN_SEP};
use anyhow::{Context, Result};
use bolt_common::{
    add_entry, delete_entry, filter_entries, offline_reply, system_instruction, update_entry,
    BoltConfig, KeyValueStore, KnowledgeStore, SCHEMA_VERSION,
};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Print entries, optionally filtered by a case-insensitive substring
pub fn list<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    filter: Option<&str>,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    let entries = store.load();
    let shown = filter_entries(&entries, filter.unwrap_or(""));

    writeln!(out, "{}", section("KNOWLEDGE BASE", color))?;
    match filter {
        Some(f) => writeln!(out, "  {} of {} entries match '{}'", shown.len(), entries.len(), f)?,
        None => writeln!(out, "  {} entries", entries.len())?,
    }
    writeln!(out, "{}", THIN_SEP)?;
    for entry in shown {
        writeln!(out, "{}", format_entry(entry, color))?;
    }
    Ok(())
}

/// Add a new entry and persist the collection
pub fn add<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    topic: &str,
    information: &str,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    let mut entries = store.load();
    let added = add_entry(&mut entries, topic, information)
        .context("Failed to add entry")?
        .clone();
    store
        .try_save(&entries)
        .context("Failed to save knowledge base")?;

    debug!("Added entry {}", added.id);
    writeln!(out, "{}", ok(&format!("Added {}", added.id), color))?;
    writeln!(out, "{}", format_entry(&added, color))?;
    Ok(())
}

/// Change topic and/or information of an existing entry
pub fn edit<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    id: &str,
    topic: Option<&str>,
    information: Option<&str>,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    if topic.is_none() && information.is_none() {
        return Err(UsageError("Nothing to edit: pass --topic and/or --information".to_string()).into());
    }

    let mut entries = store.load();
    let updated = update_entry(&mut entries, id, topic, information)
        .with_context(|| format!("Failed to edit entry {}", id))?
        .clone();
    store
        .try_save(&entries)
        .context("Failed to save knowledge base")?;

    writeln!(out, "{}", ok(&format!("Updated {}", updated.id), color))?;
    writeln!(out, "{}", format_entry(&updated, color))?;
    Ok(())
}

/// Remove an entry and persist the collection
pub fn delete<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    id: &str,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    let mut entries = store.load();
    let removed = delete_entry(&mut entries, id)
        .with_context(|| format!("Failed to delete entry {}", id))?;
    store
        .try_save(&entries)
        .context("Failed to save knowledge base")?;

    writeln!(out, "{}", ok(&format!("Deleted {}", removed.id), color))?;
    Ok(())
}

/// Answer a question from the local knowledge base
pub fn ask<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    question: &str,
    explain: bool,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    let entries = store.load();
    let reply = offline_reply(question, &entries)
        .ok_or_else(|| UsageError("Question must not be empty".to_string()))?;

    writeln!(out, "{}", reply.text)?;
    if explain {
        writeln!(out)?;
        writeln!(out, "{}", section("MATCH", color))?;
        match &reply.matched_id {
            Some(id) => writeln!(out, "  entry: {}  score: {}", id, reply.score)?,
            None => writeln!(out, "  no entry scored above the floor")?,
        }
    }
    Ok(())
}

/// Print the system instruction the online assistant is primed with
pub fn prompt<S: KeyValueStore>(store: &mut KnowledgeStore<S>, out: &mut impl Write) -> Result<()> {
    let entries = store.load();
    writeln!(out, "{}", system_instruction(&entries))?;
    Ok(())
}

/// Overwrite stored data with the built-in defaults
pub fn reset<S: KeyValueStore>(
    store: &mut KnowledgeStore<S>,
    out: &mut impl Write,
    color: bool,
) -> Result<()> {
    let defaults = store.reset().context("Failed to reset knowledge base")?;
    writeln!(
        out,
        "{}",
        ok(
            &format!("Restored {} default entries (schema {})", defaults.len(), SCHEMA_VERSION),
            color
        )
    )?;
    Ok(())
}

/// Print the effective configuration
pub fn config(config: &BoltConfig, db_path: &Path, out: &mut impl Write, color: bool) -> Result<()> {
    writeln!(out, "{}", section("PATHS", color))?;
    writeln!(out, "  database: {}", db_path.display())?;
    writeln!(out, "  schema:   {}", SCHEMA_VERSION)?;
    writeln!(out)?;
    writeln!(out, "{}", section("CONFIG", color))?;
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{exit_code, EXIT_INVALID_INPUT, EXIT_UNKNOWN_ID};
    use bolt_common::{default_knowledge_base, MemoryKv, OFFLINE_FALLBACK_MESSAGE};

    fn seeded_store() -> KnowledgeStore<MemoryKv> {
        let mut store = KnowledgeStore::new(MemoryKv::new());
        store.load();
        store
    }

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_list_all() {
        let mut store = seeded_store();
        let text = run(|out| list(&mut store, None, out, false));

        assert!(text.starts_with("[KNOWLEDGE BASE]\n  22 entries\n"));
        assert!(text.contains("  gen1  What are the school opening and closing times?"));
        assert!(text.contains("  lib3  How can I borrow books?"));
    }

    #[test]
    fn test_list_filtered() {
        let mut store = seeded_store();
        let text = run(|out| list(&mut store, Some("library"), out, false));

        assert!(text.contains("2 of 22 entries match 'library'"));
        assert!(text.contains("lib1"));
        assert!(!text.contains("gen1"));
    }

    #[test]
    fn test_add_persists() {
        let mut store = seeded_store();
        let text = run(|out| add(&mut store, "Canteen menu", "Pizza on Fridays", out, false));
        assert!(text.starts_with("[OK] Added custom-"));

        let entries = store.load();
        assert_eq!(entries.len(), 23);
        assert_eq!(entries[22].topic, "Canteen menu");
    }

    #[test]
    fn test_add_rejects_blank_topic() {
        let mut store = seeded_store();
        let err = add(&mut store, "  ", "info", &mut Vec::<u8>::new(), false).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_INPUT);
        assert_eq!(store.load(), default_knowledge_base());
    }

    #[test]
    fn test_edit_and_unknown_id() {
        let mut store = seeded_store();
        run(|out| edit(&mut store, "lib1", None, Some("Fifth floor"), out, false));
        let lib1 = store.load().into_iter().find(|e| e.id == "lib1").unwrap();
        assert_eq!(lib1.information, "Fifth floor");

        let err = edit(&mut store, "nope", Some("x"), None, &mut Vec::<u8>::new(), false).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_UNKNOWN_ID);
    }

    #[test]
    fn test_edit_requires_a_field() {
        let mut store = seeded_store();
        let err = edit(&mut store, "lib1", None, None, &mut Vec::<u8>::new(), false).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_delete_not_resurrected() {
        let mut store = seeded_store();
        run(|out| delete(&mut store, "gen3", out, false));
        assert!(store.load().iter().all(|e| e.id != "gen3"));

        let err = delete(&mut store, "gen3", &mut Vec::<u8>::new(), false).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_UNKNOWN_ID);
    }

    #[test]
    fn test_ask_with_explain() {
        let mut store = seeded_store();
        let text = run(|out| ask(&mut store, "where is the library", true, out, false));
        assert!(text.starts_with("On the fourth floor\n"));
        assert!(text.contains("entry: lib1"));
    }

    #[test]
    fn test_ask_fallback_and_blank() {
        let mut store = seeded_store();
        let text = run(|out| ask(&mut store, "xyz", false, out, false));
        assert_eq!(text.trim_end(), OFFLINE_FALLBACK_MESSAGE);

        let err = ask(&mut store, "   ", false, &mut Vec::<u8>::new(), false).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_prompt_lists_entries() {
        let mut store = seeded_store();
        let text = run(|out| prompt(&mut store, out));
        assert!(text.contains("Your name is Bolt."));
        assert!(text.contains("- **Where is the library?:** On the fourth floor"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = seeded_store();
        store.save(&[]);
        let text = run(|out| reset(&mut store, out, false));
        assert!(text.contains("Restored 22 default entries (schema 1.2)"));
        assert_eq!(store.load(), default_knowledge_base());
    }

    #[test]
    fn test_config_output() {
        let text = run(|out| config(&BoltConfig::default(), Path::new("/tmp/kb.db"), out, false));
        assert!(text.contains("database: /tmp/kb.db"));
        assert!(text.contains("level = \"warn\""));
    }
}
