//! Encoders and strict decoders for the values kept in a [`KvStore`].
//!
//! Decoders fail with [`CosmicError::CorruptState`]; [`load_or_default`]
//! turns that into a logged fallback.

use std::collections::BTreeSet;

use crate::domain::LastRead;
use crate::error::{CosmicError, Result};
use crate::store::KvStore;

pub const LAST_READ_KEY: &str = "last-read-pdf";
pub const LANGUAGE_KEY: &str = "app-language";

pub fn encode_progress(page: u32) -> String {
    page.to_string()
}

pub fn decode_progress(key: &str, raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(CosmicError::corrupt(key, "page 0")),
        Ok(p) => Ok(p),
        Err(e) => Err(CosmicError::corrupt(key, format!("page {raw:?}: {e}"))),
    }
}

/// Ascending JSON array.
pub fn encode_bookmarks(pages: &BTreeSet<u32>) -> String {
    let v: Vec<u32> = pages.iter().copied().collect();
    serde_json::to_string(&v).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_bookmarks(key: &str, raw: &str) -> Result<BTreeSet<u32>> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| CosmicError::corrupt(key, e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| CosmicError::corrupt(key, "expected an array of pages"))?;
    let mut pages = BTreeSet::new();
    for item in items {
        let page = item
            .as_u64()
            .filter(|p| *p >= 1)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or_else(|| CosmicError::corrupt(key, format!("bad page {item}")))?;
        pages.insert(page);
    }
    Ok(pages)
}

pub fn encode_last_read(rec: &LastRead) -> String {
    serde_json::to_string(rec).unwrap_or_default()
}

pub fn decode_last_read(key: &str, raw: &str) -> Result<LastRead> {
    let rec: LastRead =
        serde_json::from_str(raw).map_err(|e| CosmicError::corrupt(key, e.to_string()))?;
    if rec.page == 0 {
        return Err(CosmicError::corrupt(key, "page 0"));
    }
    Ok(rec)
}

/// Reads and decodes `key`. Absence yields `None` silently; a corrupt value
/// or a failing store is logged and also yields `None`.
pub fn load<T, F>(store: &dyn KvStore, key: &str, decode: F) -> Option<T>
where
    F: FnOnce(&str, &str) -> Result<T>,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "state read failed; using default");
            return None;
        }
    };
    match decode(key, &raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring corrupt state");
            None
        }
    }
}

pub fn load_or_default<T, F>(store: &dyn KvStore, key: &str, decode: F, default: T) -> T
where
    F: FnOnce(&str, &str) -> Result<T>,
{
    load(store, key, decode).unwrap_or(default)
}
