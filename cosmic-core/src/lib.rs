#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod util {
    pub mod uri;
}

pub mod domain;
pub mod pdf;
pub mod repo;
pub mod repo_factory;
pub mod repo_fs;
pub mod validate;

pub mod codec;
pub mod store;

pub mod session;

pub mod dashboard;
pub mod exams;
pub mod i18n;

// Re-exports: stable API surface
pub use dashboard::{ContinueReading, Dashboard};
pub use domain::{Document, LastRead, Subject};
pub use error::{CosmicError, Result};
pub use pdf::{CONTENT_TYPE, PdfPayload};
pub use policy::SessionPolicy;
pub use repo::ContentRepo;
pub use repo_fs::FsContentRepo;
pub use session::{Key, KeyEvent, LastReadStore, ReadingSession};
pub use store::{Backend, JournalStore, KvStore, MemoryStore, open_store};
pub use validate::validate_segments;
