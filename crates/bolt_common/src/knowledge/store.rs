//! Knowledge Store
//!
//! Loads and saves the entry collection through an injected key-value
//! backend. The backend is treated as unreliable: reads and writes may fail
//! or return garbage, and `load` still hands back a usable collection.

use super::defaults::default_knowledge_base;
use super::kv::{KeyValueStore, StorageError};
use super::schema::{
    KnowledgeCollection, KnowledgeEntry, DATA_STORAGE_KEY, SCHEMA_VERSION, VERSION_STORAGE_KEY,
};
use tracing::{debug, error, info, warn};

/// Persistent knowledge base over a key-value backend
pub struct KnowledgeStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> KnowledgeStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Load the current collection.
    ///
    /// A missing or outdated version tag reseeds the store with the defaults
    /// and returns them. Missing or corrupt data under a current tag falls
    /// back to the defaults without writing. Never fails.
    pub fn load(&mut self) -> KnowledgeCollection {
        let stored_version = match self.backend.get(VERSION_STORAGE_KEY) {
            Ok(version) => version,
            Err(e) => {
                warn!("Failed to read knowledge base version, using defaults: {}", e);
                return default_knowledge_base();
            }
        };

        if stored_version.as_deref() != Some(SCHEMA_VERSION) {
            info!(
                stored = stored_version.as_deref().unwrap_or("<none>"),
                current = SCHEMA_VERSION,
                "Knowledge base version changed, reseeding defaults"
            );
            let defaults = default_knowledge_base();
            if let Err(e) = self.write_seed(&defaults) {
                warn!("Failed to persist default knowledge base: {}", e);
            }
            return defaults;
        }

        match self.backend.get(DATA_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<KnowledgeCollection>(&raw) {
                Ok(entries) => {
                    debug!("Loaded {} knowledge base entries", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Stored knowledge base is corrupt, using defaults: {}", e);
                    default_knowledge_base()
                }
            },
            Ok(None) => {
                debug!("No stored knowledge base data, using defaults");
                default_knowledge_base()
            }
            Err(e) => {
                warn!("Failed to read knowledge base data, using defaults: {}", e);
                default_knowledge_base()
            }
        }
    }

    /// Replace the stored collection. The version tag is left untouched.
    /// Failures are logged; the caller's in-memory collection stays
    /// authoritative.
    pub fn save(&mut self, entries: &[KnowledgeEntry]) {
        if let Err(e) = self.try_save(entries) {
            error!("Failed to save knowledge base: {}", e);
        }
    }

    /// Same as `save`, but reports the failure to the caller
    pub fn try_save(&mut self, entries: &[KnowledgeEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.backend.set(DATA_STORAGE_KEY, &json)?;
        debug!("Saved {} knowledge base entries", entries.len());
        Ok(())
    }

    /// Discard stored data and write the defaults with the current version
    pub fn reset(&mut self) -> Result<KnowledgeCollection, StorageError> {
        let defaults = default_knowledge_base();
        self.write_seed(&defaults)?;
        info!("Knowledge base reset to {} default entries", defaults.len());
        Ok(defaults)
    }

    /// Stored version tag, if readable
    pub fn stored_version(&self) -> Option<String> {
        self.backend.get(VERSION_STORAGE_KEY).ok().flatten()
    }

    fn write_seed(&mut self, entries: &[KnowledgeEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.backend.set(DATA_STORAGE_KEY, &json)?;
        self.backend.set(VERSION_STORAGE_KEY, SCHEMA_VERSION)?;
        Ok(())
    }
}
