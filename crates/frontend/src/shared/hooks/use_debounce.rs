use crate::shared::now_ms;
use contracts::shared::catalog::Debouncer;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Результат `use_debounce`
#[derive(Clone, Copy)]
pub struct Debounced {
    /// Устоявшееся значение
    pub settled: Signal<String>,
    /// Ввод ещё не устоялся (для индикатора "Searching...")
    pub is_pending: Signal<bool>,
}

/// Debounce a string signal by `delay_ms`.
///
/// Each change restarts the timer; replacing the stored `Timeout` cancels
/// the previous one. Pending timers are cancelled on unmount.
pub fn use_debounce(source: Signal<String>, delay_ms: u32) -> Debounced {
    let machine = RwSignal::new(Debouncer::new(
        source.get_untracked(),
        u64::from(delay_ms),
    ));
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = source.get();

        let ticket = machine
            .try_update(|d| {
                if *d.latest() == value {
                    None
                } else {
                    Some(d.push(value, now_ms()))
                }
            })
            .flatten();

        if let Some(ticket) = ticket {
            let timeout = Timeout::new(delay_ms, move || {
                machine.try_update(|d| d.fire(ticket));
            });
            // Предыдущий таймер отменяется при замене
            timer.set_value(Some(timeout));
        }
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
        machine.try_update(|d| d.cancel());
    });

    let settled = Memo::new(move |_| machine.with(|d| d.settled().clone()));
    let is_pending = Memo::new(move |_| machine.with(|d| d.is_pending()));

    Debounced {
        settled: settled.into(),
        is_pending: is_pending.into(),
    }
}
