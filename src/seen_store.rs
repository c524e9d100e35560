use crate::types::Result;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Persists the set of already-reported item links across runs.
///
/// The store is a single JSON file holding an array of link strings.
/// Every save is a full snapshot rewrite, no append log and no locking.
/// Concurrent runs against the same file are unsupported.
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the persisted seen-set. A missing file is the expected
    /// initial condition and yields an empty set; any other failure is an
    /// error, because running without dedup history would silently
    /// re-report everything.
    pub fn load(&self) -> Result<HashSet<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let links: Vec<String> = serde_json::from_str(&raw)?;
                debug!("loaded {} seen links from {}", links.len(), self.path.display());
                Ok(links.into_iter().collect())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no seen-set at {}, starting empty", self.path.display());
                Ok(HashSet::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the store with the full current set. Links are sorted
    /// so the file content is stable across runs with the same set.
    pub fn save(&self, seen: &HashSet<String>) -> Result<()> {
        let mut links: Vec<&String> = seen.iter().collect();
        links.sort();
        fs::write(&self.path, serde_json::to_string_pretty(&links)?)?;
        debug!("saved {} seen links to {}", links.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_empty_set() {
        let dir = tempdir().unwrap();
        let store = SeenStore::new(dir.path().join("seen_items.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SeenStore::new(dir.path().join("seen_items.json"));

        let seen: HashSet<String> = ["http://a/1", "http://b/2", "http://b/3"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        store.save(&seen).unwrap();
        assert_eq!(store.load().unwrap(), seen);

        // save(load()) leaves the observable content unchanged
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(store.load().unwrap(), seen);
    }

    #[test]
    fn save_is_a_full_snapshot_not_an_append() {
        let dir = tempdir().unwrap();
        let store = SeenStore::new(dir.path().join("seen_items.json"));

        let first: HashSet<String> = ["http://a/1".to_string()].into_iter().collect();
        store.save(&first).unwrap();

        let second: HashSet<String> = ["http://b/2".to_string()].into_iter().collect();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }

    #[test]
    fn corrupt_file_is_an_error_not_an_empty_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen_items.json");
        fs::write(&path, "not json").unwrap();

        let store = SeenStore::new(&path);
        assert!(store.load().is_err());
    }
}
