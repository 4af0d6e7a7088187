use crate::domain::{LastRead, Subject};
use crate::session::LastReadStore;

/// "Continue reading" shortcut derived from the last-read record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinueReading {
    pub href: String,
    pub title: String,
    pub subject: String,
    pub page: u32,
}

impl From<&LastRead> for ContinueReading {
    fn from(rec: &LastRead) -> Self {
        Self {
            href: rec.document().page_href(),
            title: rec.name.clone(),
            subject: rec.subject.clone(),
            page: rec.page,
        }
    }
}

/// Subject list plus a snapshot of the last-read record taken at mount.
/// Later page changes are not reflected until the dashboard is mounted again.
pub struct Dashboard {
    subjects: Vec<Subject>,
    last_read: Option<LastRead>,
}

impl Dashboard {
    pub fn mount(subjects: Vec<Subject>, last_read: &LastReadStore) -> Self {
        Self {
            subjects,
            last_read: last_read.current(),
        }
    }

    /// Case-insensitive substring match on the subject name.
    pub fn filter(&self, query: &str) -> Vec<&Subject> {
        let needle = query.to_lowercase();
        self.subjects
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn continue_reading(&self) -> Option<ContinueReading> {
        self.last_read.as_ref().map(ContinueReading::from)
    }
}
