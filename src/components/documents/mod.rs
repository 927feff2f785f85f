//! Documents Module
//!
//! # Components
//! - `DocumentUpload` - file picker with simulated upload progress
//! - `DocumentList` - selectable list of uploaded documents

mod document_list;
mod document_upload;

pub use document_list::DocumentList;
pub use document_upload::DocumentUpload;
