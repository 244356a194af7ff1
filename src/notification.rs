//! Transient Notifications
//!
//! One toast at a time; a newer notification replaces the current one and
//! each auto-dismisses unless replaced first.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Bootstrap alert class
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Error => "alert-danger",
            NotificationKind::Info => "alert-info",
            NotificationKind::Warning => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn class(&self) -> String {
        format!("notification alert {} alert-dismissible", self.kind.alert_class())
    }
}

/// Clear `slot` only if it still shows notification `id`
fn expire(slot: &mut Option<Notification>, id: u64) {
    if slot.as_ref().is_some_and(|n| n.id == id) {
        *slot = None;
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_id.with_value(|n| *n);
        self.next_id.update_value(|n| *n += 1);

        let message = message.into();
        log::debug!("Notify {:?}: {}", kind, message);
        self.current.set(Some(Notification { id, message, kind }));

        let current = self.current;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            current.update(|slot| expire(slot, id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Warning);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64) -> Notification {
        Notification {
            id,
            message: "Saved".into(),
            kind: NotificationKind::Success,
        }
    }

    #[test]
    fn test_error_maps_to_danger_alert() {
        let n = Notification { kind: NotificationKind::Error, ..note(1) };
        assert_eq!(n.class(), "notification alert alert-danger alert-dismissible");
    }

    #[test]
    fn test_stale_timer_keeps_newer_notification() {
        let mut slot = Some(note(2));
        expire(&mut slot, 1);
        assert_eq!(slot, Some(note(2)));

        expire(&mut slot, 2);
        assert_eq!(slot, None);
    }

    #[test]
    fn test_toast_parts_taken_from_one_notification() {
        let n = Notification { kind: NotificationKind::Warning, ..note(3) };
        let class = n.class();
        let message = n.message;
        assert_eq!(class, "notification alert alert-warning alert-dismissible");
        assert_eq!(message, "Saved");
    }
}
