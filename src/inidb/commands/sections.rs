use crate::error::Result;
use crate::store::DataStore;

/// List section names of the named database in document order. A missing
/// file lists as empty.
pub fn run<S: DataStore>(store: &S, file: &str) -> Result<Vec<String>> {
    if !store.exists(file) {
        return Ok(Vec::new());
    }
    let doc = store.load(file)?;
    Ok(doc.section_names().map(str::to_string).collect())
}
