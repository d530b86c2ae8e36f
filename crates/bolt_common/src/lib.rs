//! Bolt Common - Shared types and logic for the Bolt school assistant
//!
//! Local knowledge base: persistence with schema reseeding, offline matching,
//! validated editing, and prompt rendering for the online backend.

pub mod config;
pub mod knowledge;
pub mod paths;

pub use config::*;
pub use knowledge::*;
