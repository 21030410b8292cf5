//! Persistence provider
//!
//! The repositories treat durable storage as an opaque key-value
//! provider: a named collection maps to a flat sequence of records.
//! `load` on an absent collection yields an empty sequence; a successful
//! `save` fully replaces the prior contents.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::AppResult;

/// Collection-level storage contract.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Load all records of a collection. An absent store is an empty
    /// collection; present-but-unreadable data is an error.
    fn load(&self, collection: &str) -> AppResult<Vec<Value>>;

    /// Replace the entire durable contents of a collection.
    fn save(&self, collection: &str, records: &[Value]) -> AppResult<()>;
}

/// File-backed store keeping each collection as `<data_dir>/<name>.json`
/// holding a pretty-printed JSON array of records.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}

impl Storage for JsonStore {
    fn load(&self, collection: &str) -> AppResult<Vec<Value>> {
        let path = self.path_for(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        let records = serde_json::from_str(&contents)?;
        tracing::debug!(collection, path = %path.display(), "loaded collection");
        Ok(records)
    }

    fn save(&self, collection: &str, records: &[Value]) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.path_for(collection);
        // Write to a sibling temp file and rename into place so an
        // interrupted flush never leaves a half-written collection.
        let tmp = self.data_dir.join(format!("{}.json.tmp", collection));
        fs::write(&tmp, serde_json::to_string_pretty(records)?)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(collection, records = records.len(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_on_absent_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load("books").unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let records = vec![json!({"name": "Alice", "member_id": "M1"})];

        store.save("members", &records).unwrap();

        assert_eq!(store.load("members").unwrap(), records);
    }

    #[test]
    fn save_fully_replaces_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save("books", &[json!({"isbn": "111"}), json!({"isbn": "222"})]).unwrap();
        store.save("books", &[json!({"isbn": "333"})]).unwrap();

        assert_eq!(store.load("books").unwrap(), vec![json!({"isbn": "333"})]);
    }

    #[test]
    fn load_on_malformed_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("loans.json"), "not json").unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load("loans").is_err());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        store.save("books", &[]).unwrap();

        assert!(dir.path().join("books.json").exists());
        assert!(!dir.path().join("books.json.tmp").exists());
    }
}
