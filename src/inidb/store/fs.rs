use super::DataStore;
use crate::error::{DbError, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // Names are joined onto the base directory without containment checks,
    // matching the storage contract: the caller owns name hygiene.
    fn resolve(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn ensure_base_dir(&self) -> Result<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(DbError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, name: &str) -> Result<Document> {
        let path = self.resolve(name);
        if !path.exists() {
            return Ok(Document::default());
        }
        let content = fs::read_to_string(path).map_err(DbError::Io)?;
        Document::parse(&content)
    }

    fn save(&mut self, name: &str, doc: &Document) -> Result<()> {
        self.ensure_base_dir()?;
        fs::write(self.resolve(name), doc.render()).map_err(DbError::Io)
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        fs::remove_file(self.resolve(name)).map_err(DbError::Io)
    }

    fn exists(&self, name: &str) -> bool {
        fs::File::open(self.resolve(name)).is_ok()
    }
}
