use crate::error::Result;
use crate::store::DataStore;

/// Look up `section.key` in the named database. `None` covers a missing
/// file, section, or key alike.
pub fn run<S: DataStore>(
    store: &S,
    file: &str,
    section: &str,
    key: &str,
) -> Result<Option<String>> {
    if !store.exists(file) {
        return Ok(None);
    }
    let doc = store.load(file)?;
    Ok(doc.get(section, key).map(str::to_string))
}
