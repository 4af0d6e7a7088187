use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use cosmic_core::validate::{validate_segment, validate_segments};
use cosmic_core::{ContentRepo, Subject};
use http::HeaderValue;
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use std::sync::Arc;

use crate::AppState;
use crate::error::ApiError;

/// Both fields are optional so that absence maps to our own 400 body
/// rather than the extractor's rejection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PdfQuery {
    pub subject: Option<String>,
    pub file: Option<String>,
}

impl PdfQuery {
    /// The first occurrence of a repeated parameter wins; unknown names are
    /// ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "subject" => &mut q.subject,
                "file" => &mut q.file,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        q
    }
}

async fn blocking<T, F>(content: Arc<dyn ContentRepo>, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn ContentRepo) -> cosmic_core::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(content.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// `GET /api/pdf?subject=<name>&file=<name>`
pub async fn pdf(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let q = PdfQuery::from_pairs(pairs);
    let (subject, file) = validate_segments(q.subject.as_deref(), q.file.as_deref())?;
    let (subject, file) = (subject.to_string(), file.to_string());
    tracing::debug!(%subject, %file, "serving pdf");

    let payload = blocking(state.content.clone(), move |c| {
        c.read_document(&subject, &file)
    })
    .await?;

    let disposition = HeaderValue::from_str(&payload.content_disposition())
        .map_err(|e| ApiError::Internal(format!("content-disposition: {e}")))?;
    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(cosmic_core::CONTENT_TYPE)),
            (CONTENT_DISPOSITION, disposition),
        ],
        payload.bytes,
    )
        .into_response())
}

/// `GET /api/subjects`
pub async fn subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, ApiError> {
    let subjects = blocking(state.content.clone(), |c| c.list_subjects()).await?;
    Ok(Json(subjects))
}

/// `GET /api/subjects/{subject}`
pub async fn documents(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    validate_segment(&subject)?;
    let docs = blocking(state.content.clone(), move |c| c.list_documents(&subject)).await?;
    Ok(Json(docs))
}
