// cosmic_core/src/domain.rs
use serde::{Deserialize, Serialize};

use crate::util::uri::encode_component;

/// A top-level content folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(rename = "pdfCount")]
    pub pdf_count: usize,
}

/// One PDF inside a subject folder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    pub subject: String,
    pub name: String,
}

impl Document {
    pub fn new(subject: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: name.into(),
        }
    }

    /// Byte-stream URL served by the PDF endpoint.
    pub fn pdf_url(&self) -> String {
        format!(
            "/api/pdf?subject={}&file={}",
            encode_component(&self.subject),
            encode_component(&self.name)
        )
    }

    /// Reader page URL, as linked from subject listings and the dashboard.
    pub fn page_href(&self) -> String {
        format!(
            "/{}/{}",
            encode_component(&self.subject),
            encode_component(&self.name)
        )
    }

    /// Storage keys are scoped by file name only, so two subjects holding
    /// the same file name share progress and bookmarks.
    pub fn progress_key(&self) -> String {
        format!("progress-{}", self.name)
    }

    pub fn bookmarks_key(&self) -> String {
        format!("bookmarks-{}", self.name)
    }
}

/// The single most recently viewed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRead {
    pub subject: String,
    pub name: String,
    pub page: u32,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
}

impl LastRead {
    pub fn document(&self) -> Document {
        Document::new(self.subject.clone(), self.name.clone())
    }
}
