use crate::error::Result;
use crate::store::DataStore;

/// Set `section.key` in the named database, creating the file, section, and
/// key as needed.
///
/// The incoming value arrives wrapped in one pair of quote characters (an
/// artifact of the caller's serialization convention) and is unwrapped by
/// dropping exactly the first and last character. A value shorter than two
/// characters strips to the empty string.
pub fn run<S: DataStore>(
    store: &mut S,
    file: &str,
    section: &str,
    key: &str,
    value: &str,
) -> Result<()> {
    let mut doc = store.load(file)?;
    doc.set(section, key, strip_wrapping(value));
    store.save(file, &doc)
}

fn strip_wrapping(value: &str) -> &str {
    let mut chars = value.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}
