//! Notification surface
//!
//! Fire-and-forget user notifications. Every notification is also logged.

use shared::message::{NotificationLevel, NotificationPayload};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const EMPLOYEE_ADDED: &str = "Employee added successfully!";
pub const EMPLOYEE_UPDATED: &str = "Employee updated successfully!";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully!";

/// Receiver of user notifications
pub trait Notifier {
    fn notify(&mut self, payload: NotificationPayload);
}

fn log_notification(payload: &NotificationPayload) {
    match payload.level {
        NotificationLevel::Success | NotificationLevel::Info => {
            tracing::info!(level = %payload.level, title = %payload.title, "{}", payload.message)
        }
        NotificationLevel::Warning => {
            tracing::warn!(title = %payload.title, "{}", payload.message)
        }
        NotificationLevel::Error => {
            tracing::error!(title = %payload.title, "{}", payload.message)
        }
    }
}

/// A notification with the moment it was raised
#[derive(Debug, Clone)]
pub struct Toast {
    pub payload: NotificationPayload,
    pub raised_at: Instant,
}

/// Time-limited notification queue rendered by the shell
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    /// Max notifications kept at once; the oldest is dropped first
    pub const CAPACITY: usize = 8;

    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(Self::CAPACITY),
            ttl,
        }
    }

    /// Drop expired notifications
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.raised_at) < ttl);
    }

    /// Most recent notification still alive
    pub fn latest(&self) -> Option<&NotificationPayload> {
        self.toasts.back().map(|t| &t.payload)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, payload: NotificationPayload) {
        log_notification(&payload);
        if self.toasts.len() == Self::CAPACITY {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            payload,
            raised_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_and_capacity() {
        let mut queue = ToastQueue::default();
        assert!(queue.latest().is_none());
        for i in 0..10 {
            queue.notify(NotificationPayload::info("Info", format!("n{i}")));
        }
        assert_eq!(queue.len(), ToastQueue::CAPACITY);
        assert_eq!(queue.latest().unwrap().message, "n9");
        assert_eq!(queue.iter().next().unwrap().payload.message, "n2");
    }

    #[test]
    fn test_prune_expired() {
        let mut queue = ToastQueue::new(Duration::from_millis(50));
        queue.notify(NotificationPayload::success("Success", EMPLOYEE_ADDED));
        let raised = queue.iter().next().unwrap().raised_at;

        queue.prune_at(raised + Duration::from_millis(10));
        assert_eq!(queue.len(), 1);

        queue.prune_at(raised + Duration::from_millis(50));
        assert!(queue.is_empty());
    }
}
