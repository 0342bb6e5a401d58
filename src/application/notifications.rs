// Notification center - transient toast messages with auto-dismissal
use crate::domain::event::{DashboardEvent, Notification, Severity};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct NotificationCenter {
    next_id: Arc<AtomicU64>,
    active: Arc<Mutex<Vec<Notification>>>,
    ttl: Duration,
    events: broadcast::Sender<DashboardEvent>,
}

impl NotificationCenter {
    pub fn new(ttl: Duration, events: broadcast::Sender<DashboardEvent>) -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(1)),
            active: Arc::new(Mutex::new(Vec::new())),
            ttl,
            events,
        }
    }

    fn active_list(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show a notification now; it is dismissed after the TTL.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            severity,
            shown_at: Utc::now(),
        };
        tracing::info!(
            id = notification.id,
            %severity,
            message = %notification.message,
            "Notification shown"
        );

        self.active_list().push(notification.clone());
        let _ = self
            .events
            .send(DashboardEvent::NotificationShown(notification.clone()));

        let center = self.clone();
        let id = notification.id;
        tokio::spawn(async move {
            tokio::time::sleep(center.ttl).await;
            center.dismiss(id);
        });

        notification
    }

    /// Show a notification once `delay` has passed.
    pub fn push_after(&self, delay: Duration, message: impl Into<String>, severity: Severity) {
        let center = self.clone();
        let message = message.into();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            center.push(message, severity);
        });
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let removed = {
            let mut active = self.active_list();
            let before = active.len();
            active.retain(|n| n.id != id);
            active.len() != before
        };
        if removed {
            tracing::debug!(id, "Notification dismissed");
            let _ = self.events.send(DashboardEvent::NotificationDismissed { id });
        }
        removed
    }

    pub fn active(&self) -> Vec<Notification> {
        self.active_list().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notifications_auto_dismiss() {
        let (tx, mut rx) = broadcast::channel(16);
        let center = NotificationCenter::new(Duration::from_millis(30), tx);

        let shown = center.push("Data refreshed successfully!", Severity::Success);
        assert_eq!(center.active().len(), 1);
        assert_eq!(
            rx.recv().await.unwrap(),
            DashboardEvent::NotificationShown(shown.clone())
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(center.active().is_empty());
        assert_eq!(
            rx.recv().await.unwrap(),
            DashboardEvent::NotificationDismissed { id: shown.id }
        );
    }

    #[tokio::test]
    async fn test_push_after_delays_display() {
        let (tx, _rx) = broadcast::channel(16);
        let center = NotificationCenter::new(Duration::from_secs(3), tx);

        center.push_after(Duration::from_millis(30), "later", Severity::Info);
        assert!(center.active().is_empty());
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(center.active()[0].message, "later");
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (tx, _rx) = broadcast::channel(16);
        let center = NotificationCenter::new(Duration::from_secs(3), tx);
        let a = center.push("a", Severity::Info);
        let b = center.push("b", Severity::Error);
        assert_ne!(a.id, b.id);
        assert!(center.dismiss(a.id));
        assert!(!center.dismiss(a.id));
    }
}
