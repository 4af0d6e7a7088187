use thiserror::Error;

#[derive(Error, Debug)]
pub enum CosmicError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    /// A required request parameter was absent or empty.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A path segment failed the traversal-safe character rule.
    #[error("unsafe path segment: {0:?}")]
    UnsafeSegment(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// A storage key exists but its value does not decode.
    #[error("corrupt state under {key}: {reason}")]
    CorruptState { key: String, reason: String },
}

impl CosmicError {
    pub fn corrupt(key: &str, reason: impl Into<String>) -> Self {
        Self::CorruptState {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, CosmicError>;
