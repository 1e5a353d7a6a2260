use super::DataStore;
use crate::error::{DbError, Result};
use crate::model::Document;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Holds rendered INI text per name, so load/save still go through the
/// parser. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, name: &str) -> Result<Document> {
        match self.files.get(name) {
            Some(content) => Document::parse(content),
            None => Ok(Document::default()),
        }
    }

    fn save(&mut self, name: &str, doc: &Document) -> Result<()> {
        self.files.insert(name.to_string(), doc.render());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        match self.files.remove(name) {
            Some(_) => Ok(()),
            None => Err(DbError::Store(format!("no such database: {}", name))),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed a database from raw INI text, bypassing the document model.
        pub fn with_raw_file(mut self, name: &str, content: &str) -> Self {
            self.store.files.insert(name.to_string(), content.to_string());
            self
        }

        /// Seed a database holding a single record.
        pub fn with_record(mut self, name: &str, section: &str, key: &str, value: &str) -> Self {
            let mut doc = self.store.load(name).unwrap();
            doc.set(section, key, value);
            self.store.save(name, &doc).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn honors_the_datastore_contract() {
        let mut store = InMemoryStore::new();

        assert!(!store.exists("db.ini"));
        assert!(store.load("db.ini").unwrap().is_empty());

        let mut doc = Document::new();
        doc.set("a", "x", "1");
        store.save("db.ini", &doc).unwrap();

        assert!(store.exists("db.ini"));
        assert_eq!(store.load("db.ini").unwrap(), doc);

        store.remove("db.ini").unwrap();
        assert!(!store.exists("db.ini"));
        assert!(store.remove("db.ini").is_err());
    }

    #[test]
    fn fixture_seeds_records() {
        let fixture = StoreFixture::new().with_record("db.ini", "main", "key", "value");
        assert_eq!(
            fixture.store.load("db.ini").unwrap().get("main", "key"),
            Some("value")
        );
    }

    #[test]
    fn fixture_raw_file_can_hold_malformed_content() {
        let fixture = StoreFixture::new().with_raw_file("bad.ini", "garbage\n");
        assert!(fixture.store.load("bad.ini").is_err());
    }
}
