use std::path::PathBuf;

use crate::repo::ContentRepo;
use crate::repo_fs::FsContentRepo;

pub enum ContentBackend {
    Fs(PathBuf),
}

pub fn open_content(backend: ContentBackend) -> Box<dyn ContentRepo> {
    match backend {
        ContentBackend::Fs(root) => Box::new(FsContentRepo::new(root)),
    }
}
