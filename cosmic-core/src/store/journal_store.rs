use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;
use crate::store::KvStore;
use crate::store::inmem::InMemIndex;
use crate::store::journal::{Journal, LogRecord};

struct Inner {
    journal: Journal,
    index: InMemIndex,
}

/// Durable store: every `set` is appended to a [`Journal`]; reads are served
/// from an index rebuilt by replay on open.
pub struct JournalStore {
    inner: Mutex<Inner>,
}

impl JournalStore {
    pub fn open(path: &Path) -> Result<Self> {
        let mut journal = Journal::open(path)?;
        let mut index = InMemIndex::default();
        let replayed = journal.replay(|rec| index.apply(&rec))?;
        tracing::debug!(
            path = %path.display(),
            replayed,
            keys = index.by_key.len(),
            "state journal opened"
        );
        Ok(Self {
            inner: Mutex::new(Inner { journal, index }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of every key and its current value, in key order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.lock()
            .index
            .by_key
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl KvStore for JournalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().index.by_key.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let rec = LogRecord::Set {
            key: key.to_string(),
            value: value.to_string(),
        };
        let mut inner = self.lock();
        inner.journal.append(&rec)?;
        inner.index.apply(&rec);
        Ok(())
    }
}
