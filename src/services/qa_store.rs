//! Q&A Store
//!
//! Owns the client's state: uploaded documents, the current selection and
//! the question/answer history. Views read the signals; changes go through
//! [`QaStore::dispatch`].

use leptos::prelude::*;

use crate::bindings::{ApiClient, AskRequest, ClientError, Document, QuestionRecord, UploadFile};

/// A request from a view to change the store
#[derive(Debug, Clone, PartialEq)]
pub enum QaCommand {
    /// Send a file to the backend and record the resulting document
    Upload(UploadFile),
    /// Target subsequent questions at this document
    SelectDocument(String),
    /// Ask about the selected document; ignored when nothing is selected
    Ask(String),
}

#[derive(Clone, Copy)]
pub struct QaStore {
    pub documents: RwSignal<Vec<Document>>,
    pub selected_document_id: RwSignal<Option<String>>,
    pub questions: RwSignal<Vec<QuestionRecord>>,
    api: StoredValue<ApiClient>,
}

impl QaStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            selected_document_id: RwSignal::new(None),
            questions: RwSignal::new(Vec::new()),
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Apply a command, performing any network call it needs.
    ///
    /// Failures are returned to the caller untouched so the issuing control
    /// can report them.
    pub async fn dispatch(&self, command: QaCommand) -> Result<(), ClientError> {
        match command {
            QaCommand::Upload(file) => self.upload(file).await,
            QaCommand::SelectDocument(id) => {
                self.select(id);
                Ok(())
            }
            QaCommand::Ask(question) => self.ask(question).await,
        }
    }

    pub fn select(&self, id: String) {
        log::debug!("Selected document {}", id);
        self.selected_document_id.set(Some(id));
    }

    /// Tracked read of whether a document is selected
    pub fn has_selection(&self) -> bool {
        self.selected_document_id.with(Option::is_some)
    }

    async fn upload(&self, file: UploadFile) -> Result<(), ClientError> {
        let file_name = file.name.clone();
        let document = self
            .api()
            .upload_document(file)
            .await
            .inspect_err(|e| log::warn!("Upload of '{}' failed: {}", file_name, e))?;

        log::info!("Uploaded '{}' as {}", document.name, document.id);
        self.documents.update(|docs| docs.push(document));
        Ok(())
    }

    async fn ask(&self, question: String) -> Result<(), ClientError> {
        let Some(document_id) = self.selected_document_id.get_untracked() else {
            log::debug!("No document selected, ignoring question");
            return Ok(());
        };

        let request = AskRequest::new(document_id, question);
        let record = self
            .api()
            .ask_question(&request)
            .await
            .inspect_err(|e| log::warn!("Question about {} failed: {}", request.document_id, e))?;

        log::info!("Answer {} received for document {}", record.id, record.document_id);
        self.questions.update(|questions| questions.push(record));
        Ok(())
    }
}
