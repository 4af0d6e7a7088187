use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;
use crate::store::KvStore;
use crate::store::journal::LogRecord;

/// Current value per key, rebuilt by replaying log records.
#[derive(Clone, Debug, Default)]
pub struct InMemIndex {
    pub by_key: BTreeMap<String, String>,
}

impl InMemIndex {
    pub fn apply(&mut self, rec: &LogRecord) {
        match rec {
            LogRecord::Set { key, value } => {
                self.by_key.insert(key.clone(), value.clone());
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    index: Mutex<InMemIndex>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, InMemIndex> {
        // A panicked writer cannot leave a half-applied insert behind.
        self.index.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().by_key.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().apply(&LogRecord::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_absent_is_none() {
        let s = MemoryStore::default();
        assert_eq!(s.get("progress-a.pdf").unwrap(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let s = MemoryStore::default();
        s.set("k", "1").unwrap();
        s.set("k", "2").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(s.len(), 1);
    }
}
