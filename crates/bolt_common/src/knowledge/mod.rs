//! Knowledge Base v1.2
//!
//! Topic/information entries persisted in a key-value store.
//! The stored collection is replaced by the built-in defaults whenever the
//! stored schema version differs from `SCHEMA_VERSION`.

pub mod defaults;
pub mod editor;
pub mod kv;
pub mod matcher;
pub mod prompt;
pub mod responder;
pub mod schema;
pub mod store;

pub use defaults::*;
pub use editor::*;
pub use kv::*;
pub use matcher::*;
pub use prompt::*;
pub use responder::*;
pub use schema::*;
pub use store::*;
