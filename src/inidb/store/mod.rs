//! # Storage Layer
//!
//! This module defines the storage abstraction for inidb. The [`DataStore`]
//! trait allows the record operations to work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the record operations **decoupled** from path resolution and I/O
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Each database is one INI file under a fixed base directory
//!   - Caller-supplied names are joined onto the base directory as-is
//!     (no containment validation — do not expose to untrusted input)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Holds rendered INI text, so load/save still exercise the parser
//!   - No persistence
//!
//! ## Load-Mutate-Save
//!
//! There is no caching: every operation loads the named document from the
//! backend, and every mutating operation writes the whole document back.
//! Last write wins at file granularity.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for named INI documents.
pub trait DataStore {
    /// Load the named database. A name with no stored document loads as an
    /// empty document, which is what gives `write` its create-on-first-write
    /// behavior.
    fn load(&self, name: &str) -> Result<Document>;

    /// Persist the document under the given name (create or overwrite).
    fn save(&mut self, name: &str, doc: &Document) -> Result<()>;

    /// Remove the named database from storage. Removing an absent name is an
    /// error.
    fn remove(&mut self, name: &str) -> Result<()>;

    /// Whether the named database currently exists and is readable.
    fn exists(&self, name: &str) -> bool;
}
