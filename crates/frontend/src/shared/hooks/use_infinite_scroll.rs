use crate::shared::now_ms;
use contracts::shared::catalog::ScrollGate;
use contracts::shared::config::ScrollSettings;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct ObserverHandle {
    observer: IntersectionObserver,
    // замыкание должно жить, пока наблюдатель подключён
    _callback: ObserverCallback,
}

impl ObserverHandle {
    fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Request the next batch when `target` comes within `root_margin_px`
/// of the viewport.
///
/// The observer is re-attached whenever `has_more` or the target element
/// changes and is not attached at all while `has_more` is false.
/// `on_load_more` fires once per visibility event, then the gate holds
/// further events for `cooldown_ms`.
pub fn use_infinite_scroll(
    target: NodeRef<html::Div>,
    has_more: Signal<bool>,
    on_load_more: Callback<()>,
    settings: &ScrollSettings,
) {
    let gate = StoredValue::new(ScrollGate::new(u64::from(settings.cooldown_ms)));
    let handle = StoredValue::new_local(None::<ObserverHandle>);
    let root_margin = format!("{}px", settings.root_margin_px);

    Effect::new(move |_| {
        let more = has_more.get();
        let element = target.get();

        detach(handle);
        if !more {
            return;
        }
        let Some(element) = element else {
            return;
        };

        match attach(&element, &root_margin, has_more, on_load_more, gate) {
            Ok(observer) => {
                log::debug!("scroll observer attached");
                handle.set_value(Some(observer));
            }
            Err(err) => log::warn!("IntersectionObserver unavailable: {:?}", err),
        }
    });

    on_cleanup(move || detach(handle));
}

fn detach(handle: StoredValue<Option<ObserverHandle>, LocalStorage>) {
    if let Some(previous) = handle.try_update_value(|h| h.take()).flatten() {
        previous.disconnect();
        log::debug!("scroll observer detached");
    }
}

fn attach(
    element: &Element,
    root_margin: &str,
    has_more: Signal<bool>,
    on_load_more: Callback<()>,
    gate: StoredValue<ScrollGate>,
) -> Result<ObserverHandle, JsValue> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .get(0)
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false);
            let more = has_more.try_get_untracked().unwrap_or(false);

            let fire = gate
                .try_update_value(|g| g.on_visibility(intersecting, more, now_ms()))
                .unwrap_or(false);
            if fire {
                log::debug!("sentinel visible, requesting next batch");
                on_load_more.run(());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}
