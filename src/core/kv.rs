use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::errors::{HubError, HubResult};

/// String-keyed, string-valued storage with browser local-storage semantics:
/// best effort, last write wins, no transactions.
pub trait KeyValue {
    fn get(&self, key: &str) -> HubResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> HubResult<()>;
    fn delete(&self, key: &str) -> HubResult<()>;

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> HubResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> HubResult<()>
    where
        Self: Sized,
    {
        self.set(key, &serde_json::to_string(value)?)
    }
}

/// In-process storage. Clones share the same entries, the way every tab of
/// one browser profile sees the same local storage.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> HubResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HubResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> HubResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// One JSON object of string keys to string values, rewritten on every change.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> HubResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => Ok(entries),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        "Unreadable storage file, starting empty: {}",
                        e
                    );
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(HubError::storage(e)),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> HubResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(HubError::storage)?;
        }
        let body = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, body).map_err(HubError::storage)
    }
}

impl KeyValue for JsonFileStore {
    fn get(&self, key: &str) -> HubResult<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> HubResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn delete(&self, key: &str) -> HubResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_default() -> HubResult<spin_sdk::key_value::Store> {
    spin_sdk::key_value::Store::open_default().map_err(HubError::storage)
}

#[cfg(target_arch = "wasm32")]
impl KeyValue for spin_sdk::key_value::Store {
    fn get(&self, key: &str) -> HubResult<Option<String>> {
        let bytes = spin_sdk::key_value::Store::get(self, key).map_err(HubError::storage)?;
        bytes
            .map(|b| String::from_utf8(b).map_err(HubError::storage))
            .transpose()
    }

    fn set(&self, key: &str, value: &str) -> HubResult<()> {
        spin_sdk::key_value::Store::set(self, key, value.as_bytes()).map_err(HubError::storage)
    }

    fn delete(&self, key: &str) -> HubResult<()> {
        spin_sdk::key_value::Store::delete(self, key).map_err(HubError::storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("user", "{}").unwrap();
        assert_eq!(b.get("user").unwrap().as_deref(), Some("{}"));
        b.delete("user").unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn json_round_trip_through_memory() {
        let store = MemoryStore::new();
        store.set_json("list", &vec!["a", "b"]).unwrap();
        let back: Option<Vec<String>> = store.get_json("list").unwrap();
        assert_eq!(back, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("user", "{not json").unwrap();
        let res: HubResult<Option<Vec<String>>> = store.get_json("user");
        assert!(matches!(res, Err(HubError::Json(_))));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("user").unwrap(), None);
        store.set("isAuthenticated", "true").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("isAuthenticated").unwrap().as_deref(), Some("true"));
        reopened.delete("isAuthenticated").unwrap();
        assert_eq!(store.get("isAuthenticated").unwrap(), None);
    }

    #[test]
    fn unreadable_file_is_replaced_on_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("user").unwrap(), None);
        store.delete("user").unwrap();
        store.set("isAuthenticated", "true").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("isAuthenticated").map(String::as_str), Some("true"));
    }
}
