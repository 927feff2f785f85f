use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::JsFuture;

use super::client::{decode_response, ApiClient, ClientError};

// ============================================================================
// Documents
// ============================================================================

/// An uploaded document as known to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub uploaded_at: String,
}

/// File types offered by the picker. The backend decides what it accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

/// Value for the file input's `accept` attribute
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// File contents held in memory for the duration of one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Read a file picked in the browser into memory
    pub async fn from_browser_file(file: &web_sys::File) -> Result<Self, ClientError> {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| ClientError::File(format!("{:?}", e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        let content_type = Some(file.type_()).filter(|t| !t.is_empty());

        Ok(Self {
            name: file.name(),
            content_type,
            bytes,
        })
    }

    fn into_part(self) -> Result<Part, ClientError> {
        let part = Part::bytes(self.bytes).file_name(self.name);
        match self.content_type {
            Some(content_type) => Ok(part.mime_str(&content_type)?),
            None => Ok(part),
        }
    }
}

impl ApiClient {
    /// `POST /upload` with the file as multipart field `file`
    pub async fn upload_document(&self, file: UploadFile) -> Result<Document, ClientError> {
        let form = Form::new().part("file", file.into_part()?);
        let response = self.post("/upload").multipart(form).send().await?;
        decode_response(response).await
    }
}
