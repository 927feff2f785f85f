use serde::{Deserialize, Serialize};

use super::client::{decode_response, ApiClient, ClientError};

// ============================================================================
// Questions
// ============================================================================

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub document_id: String,
    pub question: String,
}

impl AskRequest {
    pub fn new(document_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            question: question.into(),
        }
    }
}

/// A question paired with the backend's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub document_id: String,
    pub question: String,
    pub answer: String,
    pub timestamp: String,
}

impl ApiClient {
    /// `POST /ask` with a JSON body
    pub async fn ask_question(&self, request: &AskRequest) -> Result<QuestionRecord, ClientError> {
        let response = self.post("/ask").json(request).send().await?;
        decode_response(response).await
    }
}
