//! Per-document reading state: page, zoom, bookmarks and zen mode.
//!
//! Every transition updates memory first; store writes are fire-and-forget
//! and a failed write is only logged.

use std::collections::BTreeSet;

use crate::codec::{
    decode_bookmarks, decode_progress, encode_bookmarks, encode_progress, load_or_default,
};
use crate::domain::Document;
use crate::policy::SessionPolicy;
use crate::store::KvStore;

pub mod keys;
pub mod last_read;

pub use keys::{Key, KeyEvent};
pub use last_read::{LastReadStore, now_millis};

pub struct ReadingSession<S: KvStore> {
    store: S,
    policy: SessionPolicy,
    last_read: LastReadStore,
    document: Document,
    current_page: u32,
    total_pages: Option<u32>,
    scale: f32,
    bookmarks: BTreeSet<u32>,
    bookmarked: bool,
    zen: bool,
    render_error: Option<String>,
}

impl<S: KvStore> ReadingSession<S> {
    /// Restores progress (default page 1) and bookmarks (default empty).
    /// Zoom and zen mode always start fresh.
    pub fn open(
        store: S,
        last_read: LastReadStore,
        policy: SessionPolicy,
        document: Document,
    ) -> Self {
        let current_page = load_or_default(&store, &document.progress_key(), decode_progress, 1);
        let bookmarks = load_or_default(
            &store,
            &document.bookmarks_key(),
            decode_bookmarks,
            BTreeSet::new(),
        );
        let bookmarked = bookmarks.contains(&current_page);
        tracing::debug!(
            subject = %document.subject,
            name = %document.name,
            page = current_page,
            bookmarks = bookmarks.len(),
            "document opened"
        );
        Self {
            store,
            policy,
            last_read,
            document,
            current_page,
            total_pages: None,
            scale: 1.0,
            bookmarks,
            bookmarked,
            zen: false,
            render_error: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn bookmarks(&self) -> &BTreeSet<u32> {
        &self.bookmarks
    }

    pub fn is_zen(&self) -> bool {
        self.zen
    }

    pub fn render_error(&self) -> Option<&str> {
        self.render_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.total_pages.is_none() && self.render_error.is_none()
    }

    /// Fill ratio of the reading progress bar, capped at 1.
    pub fn progress_fraction(&self) -> f32 {
        let total = self.total_pages.unwrap_or(1).max(1);
        (self.current_page as f32 / total as f32).min(1.0)
    }

    /// Upper page bound; unbounded until the page count is known.
    fn upper_bound(&self) -> i64 {
        match self.total_pages {
            Some(total) => i64::from(total.max(1)),
            None => i64::from(u32::MAX),
        }
    }

    /// Moves to `target` clamped to `[1, total]`. Returns whether the page
    /// changed; only a change is persisted and recorded as last read.
    pub fn go_to_page(&mut self, target: i64) -> bool {
        let page = target.clamp(1, self.upper_bound()) as u32;
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.bookmarked = self.bookmarks.contains(&page);
        self.persist(&self.document.progress_key(), &encode_progress(page));
        self.last_read.record(&self.store, &self.document, page, now_millis());
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(i64::from(self.current_page) + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(i64::from(self.current_page) - 1)
    }

    /// Session-local; never persisted.
    pub fn set_scale(&mut self, target: f32) -> f32 {
        self.scale = self.policy.clamp_scale(target);
        self.scale
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_scale(self.scale + self.policy.scale_step)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_scale(self.scale - self.policy.scale_step)
    }

    pub fn reset_zoom(&mut self) -> f32 {
        self.set_scale(1.0)
    }

    /// Flips membership of the current page and writes the whole set back.
    /// Returns the new indicator state.
    pub fn toggle_bookmark(&mut self) -> bool {
        let page = self.current_page;
        if !self.bookmarks.remove(&page) {
            self.bookmarks.insert(page);
        }
        self.bookmarked = self.bookmarks.contains(&page);
        self.persist(
            &self.document.bookmarks_key(),
            &encode_bookmarks(&self.bookmarks),
        );
        self.bookmarked
    }

    /// Returns the new zen state so the parent view can hide or show chrome.
    pub fn toggle_zen_mode(&mut self) -> bool {
        self.zen = !self.zen;
        self.zen
    }

    pub fn on_document_loaded(&mut self, total_pages: u32) {
        self.total_pages = Some(total_pages);
        self.render_error = None;
        let bound = total_pages.max(1);
        if self.policy.clamp_restored_page && self.current_page > bound {
            tracing::debug!(
                restored = self.current_page,
                total = total_pages,
                "clamping restored page"
            );
            self.current_page = bound;
            self.bookmarked = self.bookmarks.contains(&bound);
            self.persist(&self.document.progress_key(), &encode_progress(bound));
        }
    }

    /// The renderer could not display the byte stream. Shown inline; the
    /// rest of the session keeps working.
    pub fn on_document_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(name = %self.document.name, error = %message, "document render failed");
        self.render_error = Some(message);
    }

    fn persist(&self, key: &str, value: &str) {
        match self.store.set(key, value) {
            Ok(()) => tracing::debug!(key, value, "state persisted"),
            Err(e) => tracing::warn!(key, error = %e, "state write failed"),
        }
    }
}
