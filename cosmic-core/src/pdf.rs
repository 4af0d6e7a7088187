use std::path::Path;

use crate::error::{CosmicError, Result};

pub const CONTENT_TYPE: &str = "application/pdf";

/// Full byte content of one PDF plus the name used in the disposition hint.
#[derive(Clone, Debug)]
pub struct PdfPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl PdfPayload {
    pub fn content_disposition(&self) -> String {
        format!("inline; filename=\"{}\"", self.filename)
    }
}

pub fn stream_document(path: &Path) -> Result<PdfPayload> {
    if !path.is_file() {
        return Err(CosmicError::NotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PdfPayload { bytes, filename })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = stream_document(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, CosmicError::NotFound(_)));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("odd.pdf")).unwrap();
        let err = stream_document(&dir.path().join("odd.pdf")).unwrap_err();
        assert!(matches!(err, CosmicError::NotFound(_)));
    }

    #[test]
    fn reads_bytes_and_disposition() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("lecture 1.pdf");
        std::fs::write(&p, b"%PDF-1.4 test").unwrap();
        let payload = stream_document(&p).unwrap();
        assert_eq!(payload.bytes, b"%PDF-1.4 test");
        assert_eq!(payload.content_disposition(), "inline; filename=\"lecture 1.pdf\"");
    }
}
