use crate::error::{CosmicError, Result};

/// `^[A-Za-z0-9_\-.\s]+$` with `..` rejected anywhere in the segment.
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains("..")
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') || c.is_whitespace())
}

pub fn validate_segment(segment: &str) -> Result<&str> {
    if is_safe_segment(segment) {
        Ok(segment)
    } else {
        Err(CosmicError::UnsafeSegment(segment.to_string()))
    }
}

/// Validates a `(subject, file)` request pair. Presence is checked for both
/// before either is pattern-checked, so a missing file with a hostile subject
/// is still a missing-parameter error.
pub fn validate_segments<'a>(
    subject: Option<&'a str>,
    file: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    let subject = subject
        .filter(|s| !s.is_empty())
        .ok_or(CosmicError::MissingParameter("subject"))?;
    let file = file
        .filter(|s| !s.is_empty())
        .ok_or(CosmicError::MissingParameter("file"))?;
    Ok((validate_segment(subject)?, validate_segment(file)?))
}
