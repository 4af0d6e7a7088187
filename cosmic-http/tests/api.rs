use std::fs;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use cosmic_core::FsContentRepo;
use cosmic_http::{AppState, router};
use http::{Request, StatusCode, header};
use tower::ServiceExt;

struct Fixture {
    _dir: tempfile::TempDir,
    app: Router,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let net = dir.path().join("Networking");
    fs::create_dir(&net).unwrap();
    fs::write(net.join("a.pdf"), b"%PDF-1.7 a").unwrap();
    fs::write(net.join("b.pdf"), b"%PDF-1.7 b").unwrap();
    fs::write(net.join("NOTES.txt"), b"not a pdf").unwrap();
    let cn = dir.path().join("Computer Network");
    fs::create_dir(&cn).unwrap();
    fs::write(cn.join("week 1.pdf"), b"%PDF-1.7 week").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    let app = router(AppState::new(Arc::new(FsContentRepo::new(dir.path()))));
    Fixture { _dir: dir, app }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, http::HeaderMap, Vec<u8>) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn serves_pdf_bytes_inline() {
    let f = fixture();
    let (status, headers, body) = get(&f.app, "/api/pdf?subject=Networking&file=a.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(headers[header::CONTENT_DISPOSITION], "inline; filename=\"a.pdf\"");
    assert_eq!(body, b"%PDF-1.7 a");
}

#[tokio::test]
async fn encoded_spaces_resolve() {
    let f = fixture();
    let (status, _, body) = get(
        &f.app,
        "/api/pdf?subject=Computer%20Network&file=week%201.pdf",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"%PDF-1.7 week");
}

#[tokio::test]
async fn missing_parameters_are_400() {
    let f = fixture();
    for uri in [
        "/api/pdf",
        "/api/pdf?subject=Networking",
        "/api/pdf?file=a.pdf",
        "/api/pdf?subject=&file=a.pdf",
    ] {
        let (status, _, body) = get(&f.app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, b"Missing subject or file parameter");
    }
}

#[tokio::test]
async fn repeated_parameters_use_the_first_value() {
    let f = fixture();
    let (status, _, body) = get(
        &f.app,
        "/api/pdf?subject=Networking&subject=Python&file=b.pdf&file=a.pdf",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"%PDF-1.7 b");

    let (status, _, body) = get(&f.app, "/api/pdf?subject=Networking&file=&file=a.pdf").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Missing subject or file parameter");
}

#[tokio::test]
async fn traversal_is_403() {
    let f = fixture();
    for uri in [
        "/api/pdf?subject=Networking&file=../../etc/passwd",
        "/api/pdf?subject=..&file=a.pdf",
        "/api/pdf?subject=Networking&file=a..pdf",
        "/api/pdf?subject=Networking&file=%2Fetc%2Fpasswd",
    ] {
        let (status, _, body) = get(&f.app, uri).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body, b"Invalid path parameters");
    }
}

#[tokio::test]
async fn absent_file_is_404() {
    let f = fixture();
    let (status, _, body) = get(&f.app, "/api/pdf?subject=Networking&file=missing.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"File not found");
}

#[tokio::test]
async fn lists_subjects_as_json() {
    let f = fixture();
    let (status, headers, body) = get(&f.app, "/api/subjects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let mut subjects: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    subjects.sort_by_key(|s| s["name"].as_str().unwrap().to_string());
    assert_eq!(
        serde_json::Value::Array(subjects),
        serde_json::json!([
            {"name": "Computer Network", "pdfCount": 1},
            {"name": "Networking", "pdfCount": 2}
        ])
    );
}

#[tokio::test]
async fn lists_documents_of_a_subject() {
    let f = fixture();
    let (status, _, body) = get(&f.app, "/api/subjects/Networking").await;
    assert_eq!(status, StatusCode::OK);
    let mut docs: Vec<String> = serde_json::from_slice(&body).unwrap();
    docs.sort();
    assert_eq!(docs, vec!["a.pdf", "b.pdf"]);

    let (status, _, body) = get(&f.app, "/api/subjects/Chemistry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");

    let (status, _, _) = get(&f.app, "/api/subjects/a..b").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
