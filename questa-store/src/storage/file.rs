use std::fs;
use std::io;
use std::path::PathBuf;

use super::StorageBackend;
use crate::error::Result;

/// Filesystem backend: each key maps to `<data_dir>/<key>.json`, written
/// through to disk immediately on every `set`.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Creates the data directory if it does not exist yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(FileBackend { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
