pub mod ask_form;
pub mod notification_service;
pub mod qa_store;
pub mod upload_flow;
pub mod upload_progress;
