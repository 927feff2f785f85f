//! Upload Flow Tests
//!
//! Progress and toasts around a real store upload against a mock backend.
//! The timer-driven parts of `UploadFlow::run` are covered in the browser
//! tests.

#![cfg(not(target_arch = "wasm32"))]

use document_qa_frontend::bindings::{ApiClient, UploadFile};
use document_qa_frontend::config::ClientConfig;
use document_qa_frontend::services::notification_service::{NotificationState, ToastType};
use document_qa_frontend::services::qa_store::{QaCommand, QaStore};
use document_qa_frontend::services::upload_flow::{
    UploadFlow, UPLOAD_FALLBACK_MESSAGE, UPLOAD_SUCCESS_MESSAGE,
};
use document_qa_frontend::services::upload_progress::{UploadProgress, PROGRESS_COMPLETE};
use leptos::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upload_through(flow: UploadFlow, store: QaStore, name: &str) -> bool {
    flow.begin();
    let result = store
        .dispatch(QaCommand::Upload(UploadFile::new(name, b"%PDF-1.4".to_vec())))
        .await;
    flow.complete(result)
}

#[tokio::test]
async fn test_success_shows_full_bar_then_settles() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d1",
            "name": "report.pdf",
            "uploadedAt": "2024-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;
    let store = QaStore::new(ApiClient::new(ClientConfig::new(server.uri())));
    let notifications = NotificationState::new();
    let flow = UploadFlow::new(notifications);

    assert!(upload_through(flow, store, "report.pdf").await);

    let progress = flow.progress.get_untracked();
    assert_eq!(progress.percent(), PROGRESS_COMPLETE);
    assert!(progress.is_busy());
    assert_eq!(store.documents.get_untracked().len(), 1);

    let toasts = notifications.notifications.get_untracked();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].toast_type, ToastType::Success);
    assert_eq!(toasts[0].title, "Document uploaded successfully");

    flow.settle();
    assert_eq!(flow.progress.get_untracked(), UploadProgress::default());
}

#[tokio::test]
async fn test_failure_resets_at_once_and_shows_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Unsupported file type"
        })))
        .mount(&server)
        .await;
    let store = QaStore::new(ApiClient::new(ClientConfig::new(server.uri())));
    let notifications = NotificationState::new();
    let flow = UploadFlow::new(notifications);

    assert!(!upload_through(flow, store, "notes.exe").await);

    assert_eq!(flow.progress.get_untracked(), UploadProgress::default());
    assert!(store.documents.get_untracked().is_empty());

    let toasts = notifications.notifications.get_untracked();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].toast_type, ToastType::Error);
    assert_eq!(toasts[0].title, "Unsupported file type");
    assert_eq!(toasts[0].message.as_deref(), Some("HTTP 400"));
}

#[tokio::test]
async fn test_unreachable_backend_uses_fallback() {
    let store = QaStore::new(ApiClient::new(ClientConfig::new("http://127.0.0.1:9")));
    let notifications = NotificationState::new();
    let flow = UploadFlow::new(notifications);

    assert!(!upload_through(flow, store, "report.pdf").await);

    assert!(!flow.progress.get_untracked().is_busy());
    let toasts = notifications.notifications.get_untracked();
    assert_eq!(toasts[0].title, UPLOAD_FALLBACK_MESSAGE);
    assert_eq!(toasts[0].message, None);
    assert_ne!(toasts[0].title, UPLOAD_SUCCESS_MESSAGE);
}
