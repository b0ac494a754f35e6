use std::{
    collections::HashMap,
    fs::File,
    io::{ErrorKind, Read, Write},
    path::PathBuf,
};

use fs4::fs_std::FileExt;
use tracing::debug;

use crate::error::StorageError;

/// Interface for abstracting the persistence provider. Reads and writes are synchronous and
/// values are opaque text, JSON in practice.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns `None` when nothing was stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores every key as `<dir>/<key>.json`. Files are guarded with advisory locks so that two
/// invocations running at once don't interleave writes.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        debug!("Reading {path:?}");

        fn read(path: &PathBuf) -> Result<String, std::io::Error> {
            let mut file = File::open(path)?;
            FileExt::lock_shared(&file)?;
            let mut contents = String::new();
            let result = file.read_to_string(&mut contents);
            FileExt::unlock(&file)?;
            result.map(|_| contents)
        }

        match read(&path) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        debug!("Writing {} bytes into {path:?}", value.len());

        fn write(path: &PathBuf, value: &str) -> Result<(), std::io::Error> {
            let mut file = File::options()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)?;
            // Truncate only after the lock is held, otherwise a reader could observe an empty file.
            FileExt::lock_exclusive(&file)?;
            let result = file
                .set_len(0)
                .and_then(|_| file.write_all(value.as_bytes()))
                .and_then(|_| file.flush());
            FileExt::unlock(&file)?;
            result
        }

        write(&path, value).map_err(|source| StorageError::Write {
            key: key.to_owned(),
            source,
        })
    }
}

/// Keeps values in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use super::{FileStore, KeyValueStore, MemoryStore};

    #[test]
    fn test_file_store_missing_key() -> Result<()> {
        let dir = tempdir()?;
        let store = FileStore::new(dir.path().to_owned())?;
        assert_eq!(store.get("nothing")?, None);
        Ok(())
    }

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let mut store = FileStore::new(dir.path().to_owned())?;
        store.set("logs", "[1,2,3]")?;
        assert_eq!(store.get("logs")?.as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("logs.json").exists());
        Ok(())
    }

    #[test]
    fn test_file_store_shorter_value_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let mut store = FileStore::new(dir.path().to_owned())?;
        store.set("categories", r#"["a very long category","another"]"#)?;
        store.set("categories", "[]")?;
        assert_eq!(store.get("categories")?.as_deref(), Some("[]"));

        let reopened = FileStore::new(dir.path().to_owned())?;
        assert_eq!(reopened.get("categories")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn test_file_store_creates_directory() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("state").join("taplog");
        let mut store = FileStore::new(nested.clone())?;
        store.set("k", "v")?;
        assert!(nested.join("k.json").exists());
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let mut store = MemoryStore::new().with_value("a", "1");
        assert_eq!(store.get("a")?.as_deref(), Some("1"));
        assert_eq!(store.get("b")?, None);
        store.set("b", "2")?;
        assert_eq!(store.get("b")?.as_deref(), Some("2"));
        Ok(())
    }
}
