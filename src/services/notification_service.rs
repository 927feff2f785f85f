use leptos::prelude::*;
use uuid::Uuid;

use crate::bindings::ClientError;

/// How long a success toast stays up
pub const SUCCESS_DURATION_MS: u64 = 2000;
/// How long an error toast stays up
pub const ERROR_DURATION_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    pub fn default_duration_ms(&self) -> u64 {
        match self {
            ToastType::Success => SUCCESS_DURATION_MS,
            ToastType::Error => ERROR_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

/// Transient toast notifications, newest last
#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, toast_type: ToastType, title: String, message: Option<String>) -> Uuid {
        let id = Uuid::new_v4();
        let notification = Notification {
            id,
            toast_type,
            title,
            message,
            duration_ms: Some(toast_type.default_duration_ms()),
        };

        self.notifications.update(|list| list.push(notification));
        id
    }

    pub fn success(&self, title: &str) -> Uuid {
        self.add(ToastType::Success, title.to_string(), None)
    }

    /// Error toast for a failed request: the backend's `detail` (or
    /// `fallback`) as title, the HTTP status underneath when there is one
    pub fn error(&self, err: &ClientError, fallback: &str) -> Uuid {
        let message = err.status().map(|status| format!("HTTP {}", status));
        self.add(ToastType::Error, err.message_or(fallback), message)
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notification_state() -> NotificationState {
    let state = NotificationState::new();
    provide_context(state);
    state
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}
