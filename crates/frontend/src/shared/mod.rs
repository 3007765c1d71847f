pub mod config;
pub mod hooks;

/// Текущее время в миллисекундах для машин состояний из `contracts`
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
