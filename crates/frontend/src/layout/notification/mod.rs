use contracts::shared::notification::{Notification, NotificationSlot, Notifier, Severity};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Сервис всплывающих уведомлений.
///
/// Одновременно показывается одно уведомление, новое заменяет предыдущее
/// вместе с его таймером автоскрытия (`ttl_ms`).
#[derive(Clone, Copy)]
pub struct NotificationService {
    slot: RwSignal<NotificationSlot>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            timer: StoredValue::new_local(None),
            ttl_ms,
        }
    }

    /// Текущее уведомление
    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|s| s.current().cloned())
    }

    /// Скрыть уведомление
    pub fn dismiss(&self) {
        self.timer.try_update_value(|t| t.take());
        self.slot.update(|s| s.dismiss());
    }
}

impl Notifier for NotificationService {
    fn notify(&self, message: &str, severity: Severity) {
        let Some(id) = self.slot.try_update(|s| s.show(message, severity)) else {
            return;
        };
        log::debug!("notification #{} [{}]: {}", id, severity, message);

        let slot = self.slot;
        let timeout = Timeout::new(self.ttl_ms, move || {
            slot.try_update(|s| s.expire(id));
        });
        // Предыдущий таймер отменяется при замене
        self.timer.set_value(Some(timeout));
    }
}

/// Компонент уведомления.
/// Использование:
/// ```ignore
/// provide_context(NotificationService::new(4000));
///
/// view! { <NotificationHost /> }
/// ```
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        {move || {
            service.current().map(|notification| {
                let severity = notification.severity;
                view! {
                    <div class=format!("notification {}", severity.as_str())>
                        <div class="notification-icon">{severity.icon()}</div>
                        <p class="notification-message">{notification.message}</p>
                        <button class="notification-close" on:click=move |_| service.dismiss()>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
