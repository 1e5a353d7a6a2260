//! # API Facade
//!
//! [`Database`] is a thin facade over the command layer: the single typed
//! entry point for record operations, regardless of the front end driving
//! them (the wire dispatcher in [`protocol`](crate::protocol), the CLI
//! binary, or an embedding host).
//!
//! It dispatches to the command functions and returns plain Rust types.
//! No wire formatting, no logging, no I/O assumptions beyond the injected
//! store.
//!
//! `Database<S: DataStore>` is generic over the storage backend:
//! - Production: `Database<FileStore>`
//! - Testing: `Database<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

pub struct Database<S: DataStore> {
    store: S,
}

impl<S: DataStore> Database<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Set `section.key` in `file` from a quote-wrapped value.
    pub fn write(&mut self, file: &str, section: &str, key: &str, value: &str) -> Result<()> {
        commands::write::run(&mut self.store, file, section, key, value)
    }

    /// Look up `section.key` in `file`.
    pub fn read(&self, file: &str, section: &str, key: &str) -> Result<Option<String>> {
        commands::read::run(&self.store, file, section, key)
    }

    pub fn delete_section(&mut self, file: &str, section: &str) -> Result<()> {
        commands::delete::section(&mut self.store, file, section)
    }

    pub fn delete_key(&mut self, file: &str, section: &str, key: &str) -> Result<()> {
        commands::delete::key(&mut self.store, file, section, key)
    }

    /// Remove the database file itself.
    pub fn delete(&mut self, file: &str) -> Result<()> {
        commands::delete::file(&mut self.store, file)
    }

    pub fn exists(&self, file: &str) -> bool {
        self.store.exists(file)
    }

    /// Section names of `file`, in document order.
    pub fn sections(&self, file: &str) -> Result<Vec<String>> {
        commands::sections::run(&self.store, file)
    }
}
