use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::Subject;
use crate::error::Result;
use crate::repo::ContentRepo;

pub const DEFAULT_IGNORED: &[&str] = &["node_modules", ".git", ".next"];

pub struct FsContentRepo {
    root: PathBuf,
    ignored: Vec<String>,
}

impl FsContentRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignored: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    fn is_subject_dir(&self, name: &str) -> bool {
        !name.starts_with('.') && !self.ignored.iter().any(|i| i == name)
    }
}

fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// Immediate children of `dir` in directory order. Symlinks are not followed.
fn children(dir: &Path) -> impl Iterator<Item = walkdir::Result<walkdir::DirEntry>> {
    WalkDir::new(dir).min_depth(1).max_depth(1).into_iter()
}

impl ContentRepo for FsContentRepo {
    fn list_subjects(&self) -> Result<Vec<Subject>> {
        if !self.root.is_dir() {
            tracing::warn!(root = %self.root.display(), "content root is not a readable directory");
            return Ok(Vec::new());
        }
        let mut subjects = Vec::new();
        for entry in children(&self.root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable content entry");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !self.is_subject_dir(name) {
                continue;
            }
            let pdf_count = self.list_documents(name)?.len();
            subjects.push(Subject {
                name: name.to_string(),
                pdf_count,
            });
        }
        Ok(subjects)
    }

    fn list_documents(&self, subject: &str) -> Result<Vec<String>> {
        let dir = self.root.join(subject);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let docs = children(&dir)
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| is_pdf_name(name))
            .collect();
        Ok(docs)
    }

    fn resolve_path(&self, subject: &str, file: &str) -> PathBuf {
        self.root.join(subject).join(file)
    }
}
