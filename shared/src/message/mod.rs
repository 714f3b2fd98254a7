//! Notification messages emitted by the core
//!
//! Delivery is fire-and-forget: the core never waits on, or inspects the
//! outcome of, a notification.

mod payload;

pub use payload::{NotificationCategory, NotificationLevel, NotificationPayload};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let n = NotificationPayload::success("Employee", "Employee added successfully!");
        assert_eq!(n.level, NotificationLevel::Success);
        assert_eq!(n.category, NotificationCategory::Business);
        assert!(n.data.is_none());

        let n = NotificationPayload::warning("Roster", "stale id").with_data(serde_json::json!(5));
        assert_eq!(n.level, NotificationLevel::Warning);
        assert_eq!(n.data, Some(serde_json::json!(5)));
    }

    #[test]
    fn test_notification_serialize() {
        let n = NotificationPayload::info("Test", "Hello World");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["category"], "system");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_level_ordering_and_display() {
        assert!(NotificationLevel::Success < NotificationLevel::Error);
        assert_eq!(NotificationLevel::Warning.to_string(), "warning");
    }
}
