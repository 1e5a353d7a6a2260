use crate::error::{DbError, Result};

/// One `[name]` block: a unique name plus ordered `key=value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or update. Updating keeps the entry's position so unrelated
    /// lines don't move on a load-mutate-save cycle.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of sections, one per INI file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line-oriented INI parse. Blank lines and `;`/`#` comment lines are
    /// skipped; whitespace around section names, keys, and values is trimmed.
    /// A duplicate section header re-opens the existing section, and a
    /// duplicate key within a section overwrites in place (last one wins).
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = Document::new();
        let mut current: Option<usize> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
                let name = name.trim();
                current = Some(match doc.sections.iter().position(|s| s.name == name) {
                    Some(i) => i,
                    None => {
                        doc.sections.push(Section::new(name));
                        doc.sections.len() - 1
                    }
                });
            } else if let Some((key, value)) = line.split_once('=') {
                let i = current.ok_or_else(|| DbError::Parse {
                    line: idx + 1,
                    message: "entry outside of any section".to_string(),
                })?;
                doc.sections[i].set(key.trim(), value.trim());
            } else {
                return Err(DbError::Parse {
                    line: idx + 1,
                    message: format!("expected `[section]` or `key=value`, got `{}`", line),
                });
            }
        }

        Ok(doc)
    }

    /// Serialize back to INI text: sections in order, one blank line between
    /// them.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in section.entries() {
                out.push_str(&format!("{}={}\n", key, value));
            }
        }
        out
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Set `section.key = value`, creating the section and key as needed.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.section_mut_or_insert(section).set(key, value);
    }

    /// Remove a whole section. Returns whether it was present.
    pub fn remove_section(&mut self, section: &str) -> bool {
        match self.sections.iter().position(|s| s.name == section) {
            Some(i) => {
                self.sections.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove one key. Returns whether it was present; an absent section is
    /// simply `false`.
    pub fn remove_key(&mut self, section: &str, key: &str) -> bool {
        match self.sections.iter_mut().find(|s| s.name == section) {
            Some(s) => s.remove(key),
            None => false,
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        let i = match self.sections.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[i]
    }
}
