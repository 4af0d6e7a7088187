//! Persistence port for per-browser state.
//!
//! Values are opaque strings; shape checks live in [`crate::codec`].

use std::path::PathBuf;

use crate::error::Result;

pub mod inmem;
pub mod journal;
pub mod journal_store;

pub use inmem::MemoryStore;
pub use journal_store::JournalStore;

pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value (last write wins).
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

pub enum Backend {
    Memory,
    Journal(PathBuf),
}

pub fn open_store(backend: Backend) -> Result<Box<dyn KvStore>> {
    match backend {
        Backend::Memory => Ok(Box::new(MemoryStore::default())),
        Backend::Journal(path) => Ok(Box::new(JournalStore::open(&path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_opens_both_backends() {
        let mem = open_store(Backend::Memory).unwrap();
        mem.set("k", "v").unwrap();
        assert_eq!(mem.get("k").unwrap().as_deref(), Some("v"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cosmic.state");
        open_store(Backend::Journal(path.clone()))
            .unwrap()
            .set("k", "durable")
            .unwrap();
        let reopened = open_store(Backend::Journal(path)).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("durable"));
    }
}
