// cosmic_core/src/repo.rs
use std::path::PathBuf;

use crate::domain::Subject;
use crate::error::Result;
use crate::pdf::{PdfPayload, stream_document};

/// Read-only view over the subject folders and the PDFs inside them.
pub trait ContentRepo: Send + Sync {
    /// Subjects in directory order.
    fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// PDF file names directly inside `subject`. A missing or unreadable
    /// subject folder yields an empty list.
    fn list_documents(&self, subject: &str) -> Result<Vec<String>>;

    /// Joins root, subject and file. Performs no validation; callers run
    /// [`crate::validate::validate_segments`] first.
    fn resolve_path(&self, subject: &str, file: &str) -> PathBuf;

    fn read_document(&self, subject: &str, file: &str) -> Result<PdfPayload> {
        stream_document(&self.resolve_path(subject, file))
    }
}
