use std::sync::{Arc, RwLock};

use crate::codec::{LAST_READ_KEY, decode_last_read, encode_last_read, load};
use crate::domain::{Document, LastRead};
use crate::store::KvStore;

/// Shared handle on the global "last read" record.
///
/// Loaded once at application start, written only by
/// [`ReadingSession::go_to_page`](crate::session::ReadingSession::go_to_page),
/// read by the dashboard projection. Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct LastReadStore {
    inner: Arc<RwLock<Option<LastRead>>>,
}

pub fn now_millis() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

impl LastReadStore {
    pub fn load(store: &dyn KvStore) -> Self {
        let rec = load(store, LAST_READ_KEY, decode_last_read);
        Self {
            inner: Arc::new(RwLock::new(rec)),
        }
    }

    pub fn current(&self) -> Option<LastRead> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Overwrites the record and persists it. `date` never moves backwards,
    /// even if the wall clock does.
    pub(crate) fn record(
        &self,
        store: &dyn KvStore,
        doc: &Document,
        page: u32,
        now: i64,
    ) -> LastRead {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let date = guard.as_ref().map_or(now, |prev| now.max(prev.date));
        let rec = LastRead {
            subject: doc.subject.clone(),
            name: doc.name.clone(),
            page,
            date,
        };
        if let Err(e) = store.set(LAST_READ_KEY, &encode_last_read(&rec)) {
            tracing::warn!(error = %e, "failed to persist last-read record");
        }
        *guard = Some(rec.clone());
        rec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn load_absent_and_corrupt_are_none() {
        let store = MemoryStore::default();
        assert!(LastReadStore::load(&store).current().is_none());
        store.set(LAST_READ_KEY, "[1,2]").unwrap();
        assert!(LastReadStore::load(&store).current().is_none());
    }

    #[test]
    fn record_persists_and_is_shared() {
        let store = MemoryStore::default();
        let lr = LastReadStore::load(&store);
        let view = lr.clone();
        lr.record(&store, &Document::new("Python", "intro.pdf"), 3, 1_000);
        assert_eq!(view.current().unwrap().page, 3);
        let reloaded = LastReadStore::load(&store).current().unwrap();
        assert_eq!(reloaded.name, "intro.pdf");
        assert_eq!(reloaded.date, 1_000);
    }

    #[test]
    fn date_is_non_decreasing() {
        let store = MemoryStore::default();
        let lr = LastReadStore::default();
        let doc = Document::new("Python", "intro.pdf");
        assert_eq!(lr.record(&store, &doc, 2, 5_000).date, 5_000);
        assert_eq!(lr.record(&store, &doc, 3, 4_000).date, 5_000);
        assert_eq!(lr.record(&store, &doc, 4, 6_000).date, 6_000);
    }
}
