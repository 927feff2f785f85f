//! Upload sequencing for the document picker.
//!
//! begin → simulated ticks → outcome → (success: full bar, settle, reset)
//! or (failure: immediate reset). Toasts are raised here so the control
//! only has to hand over the upload future.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::bindings::ClientError;
use crate::services::notification_service::NotificationState;
use crate::services::upload_progress::{ProgressTicker, UploadProgress, SETTLE_DELAY_MS};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Document uploaded successfully";
/// Shown when a failed upload carries no backend detail
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to upload document";

#[derive(Clone, Copy)]
pub struct UploadFlow {
    pub progress: RwSignal<UploadProgress>,
    notifications: NotificationState,
}

impl UploadFlow {
    pub fn new(notifications: NotificationState) -> Self {
        Self {
            progress: RwSignal::new(UploadProgress::default()),
            notifications,
        }
    }

    /// Tracked read of the busy flag
    pub fn is_busy(&self) -> bool {
        self.progress.with(UploadProgress::is_busy)
    }

    /// Tracked read of the bar position
    pub fn percent(&self) -> u8 {
        self.progress.with(UploadProgress::percent)
    }

    pub fn begin(&self) {
        self.progress.update(UploadProgress::begin);
    }

    /// Apply the upload outcome and raise its toast.
    ///
    /// Returns `true` when the full bar is showing and [`settle`](Self::settle)
    /// is still due.
    pub fn complete(&self, result: Result<(), ClientError>) -> bool {
        match result {
            Ok(()) => {
                self.progress.update(|p| p.finish(true));
                self.notifications.success(UPLOAD_SUCCESS_MESSAGE);
                true
            }
            Err(e) => {
                self.progress.update(|p| p.finish(false));
                self.notifications.error(&e, UPLOAD_FALLBACK_MESSAGE);
                false
            }
        }
    }

    pub fn settle(&self) {
        self.progress.update(UploadProgress::reset);
    }

    /// Drive one upload: tick the bar while `upload` runs, then complete and
    /// schedule the reset after [`SETTLE_DELAY_MS`].
    pub async fn run<Fut>(&self, upload: Fut) -> Result<(), ClientError>
    where
        Fut: Future<Output = Result<(), ClientError>>,
    {
        self.begin();
        let ticker = ProgressTicker::start(self.progress);
        let result = upload.await;
        ticker.stop();

        if self.complete(result.clone()) {
            let flow = *self;
            set_timeout(move || flow.settle(), Duration::from_millis(SETTLE_DELAY_MS));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notification_service::ToastType;
    use crate::services::upload_progress::{PROGRESS_COMPLETE, PROGRESS_STEP};

    #[test]
    fn test_success_fills_bar_until_settled() {
        let notifications = NotificationState::new();
        let flow = UploadFlow::new(notifications);

        flow.begin();
        flow.progress.update(|p| {
            p.tick();
        });
        assert_eq!(flow.progress.get_untracked().percent(), PROGRESS_STEP);

        assert!(flow.complete(Ok(())));
        let progress = flow.progress.get_untracked();
        assert_eq!(progress.percent(), PROGRESS_COMPLETE);
        assert!(progress.is_busy());

        flow.settle();
        assert_eq!(flow.progress.get_untracked(), UploadProgress::default());

        let toasts = notifications.notifications.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].toast_type, ToastType::Success);
        assert_eq!(toasts[0].title, UPLOAD_SUCCESS_MESSAGE);
    }
}
