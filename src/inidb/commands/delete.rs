use crate::error::Result;
use crate::store::DataStore;

/// Remove a whole section from the named database. An absent section is not
/// an error; the document is written back either way.
pub fn section<S: DataStore>(store: &mut S, file: &str, name: &str) -> Result<()> {
    let mut doc = store.load(file)?;
    doc.remove_section(name);
    store.save(file, &doc)
}

/// Remove one key from a section. Absent section or key is a no-op, and the
/// document is still written back.
pub fn key<S: DataStore>(store: &mut S, file: &str, section: &str, key: &str) -> Result<()> {
    let mut doc = store.load(file)?;
    doc.remove_key(section, key);
    store.save(file, &doc)
}

/// Remove the database file itself from storage.
pub fn file<S: DataStore>(store: &mut S, name: &str) -> Result<()> {
    store.remove(name)
}
