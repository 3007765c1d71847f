use serde::{Deserialize, Serialize};

/// Уровень уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Info => "ℹ",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Показанное пользователю уведомление
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Получатель уведомлений. Вызов не ждёт закрытия уведомления,
/// автоскрытие остаётся за реализацией.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Слот единственного показанного уведомления.
///
/// Новое уведомление вытесняет текущее; автоскрытие по `expire(id)`
/// срабатывает только для того уведомления, для которого таймер заведён.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 1,
        }
    }
}

impl NotificationSlot {
    /// Показать уведомление; возвращает его id для таймера автоскрытия
    pub fn show(&mut self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            message: message.to_string(),
            severity,
        });
        id
    }

    /// Скрыть, только если показано именно это уведомление
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_replaces_current() {
        let mut slot = NotificationSlot::default();
        let first = slot.show("Failed to load products", Severity::Error);
        let second = slot.show("Saved", Severity::Success);
        assert_ne!(first, second);

        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "Saved");
        assert_eq!(current.severity, Severity::Success);
    }

    #[test]
    fn test_expire_of_replaced_notification_keeps_newer() {
        let mut slot = NotificationSlot::default();
        let first = slot.show("first", Severity::Info);
        let second = slot.show("second", Severity::Info);

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.id), Some(second));
        assert!(slot.expire(second));
        assert_eq!(slot.current(), None);
        assert!(!slot.expire(second));
    }

    #[test]
    fn test_dismiss() {
        let mut slot = NotificationSlot::default();
        slot.show("x", Severity::Error);
        slot.dismiss();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_severity_presentation() {
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
