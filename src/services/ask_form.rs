use std::future::Future;

use leptos::prelude::*;

use crate::bindings::ClientError;
use crate::services::notification_service::NotificationState;

/// Shown when a failed ask carries no backend detail
pub const ASK_FALLBACK_MESSAGE: &str = "Failed to get answer";

/// Draft and busy flag of the question input
#[derive(Clone, Copy)]
pub struct AskForm {
    pub draft: RwSignal<String>,
    pub busy: RwSignal<bool>,
}

impl AskForm {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }

    /// The trimmed question to send, or `None` if submitting now would be a
    /// no-op (blank draft, request in flight, or control disabled).
    pub fn pending_question(&self, disabled: bool) -> Option<String> {
        if disabled || self.busy.get_untracked() {
            return None;
        }
        let question = self.draft.with_untracked(|draft| draft.trim().to_string());
        (!question.is_empty()).then_some(question)
    }

    /// Tracked check used to enable the send button
    pub fn can_submit(&self, disabled: bool) -> bool {
        !disabled && !self.busy.get() && self.draft.with(|draft| !draft.trim().is_empty())
    }

    /// Send the pending question through `ask`.
    ///
    /// Returns `None` when there was nothing to send. The draft is cleared
    /// only on success; the busy flag is cleared either way.
    pub async fn submit<F, Fut>(&self, disabled: bool, ask: F) -> Option<Result<(), ClientError>>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<(), ClientError>>,
    {
        let question = self.pending_question(disabled)?;

        self.busy.set(true);
        let result = ask(question).await;
        if result.is_ok() {
            self.draft.set(String::new());
        }
        self.busy.set(false);

        Some(result)
    }

    /// [`submit`](Self::submit), raising an error toast when the ask fails
    pub async fn submit_and_report<F, Fut>(
        &self,
        disabled: bool,
        notifications: NotificationState,
        ask: F,
    ) -> Option<Result<(), ClientError>>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<(), ClientError>>,
    {
        let outcome = self.submit(disabled, ask).await;
        if let Some(Err(e)) = &outcome {
            notifications.error(e, ASK_FALLBACK_MESSAGE);
        }
        outcome
    }
}

impl Default for AskForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_question_trims() {
        let form = AskForm::new();
        form.draft.set("  What is the summary?  ".to_string());
        assert_eq!(form.pending_question(false).as_deref(), Some("What is the summary?"));
    }

    #[test]
    fn test_pending_question_blank_draft() {
        let form = AskForm::new();
        assert_eq!(form.pending_question(false), None);
        form.draft.set(" \t\n ".to_string());
        assert_eq!(form.pending_question(false), None);
    }

    #[test]
    fn test_pending_question_respects_busy_and_disabled() {
        let form = AskForm::new();
        form.draft.set("Why?".to_string());

        assert_eq!(form.pending_question(true), None);

        form.busy.set(true);
        assert_eq!(form.pending_question(false), None);

        form.busy.set(false);
        assert_eq!(form.pending_question(false).as_deref(), Some("Why?"));
    }
}
