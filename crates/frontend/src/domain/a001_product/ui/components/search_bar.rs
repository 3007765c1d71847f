use leptos::prelude::*;

/// Поле поиска с кнопкой очистки.
///
/// Значение передаётся наружу на каждый ввод; задержка применяется
/// выше, на уровне страницы.
#[component]
#[allow(non_snake_case)]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search products...".to_string());

    view! {
        <div class="search-bar">
            <span class="search-bar__icon">"🔍"</span>
            <input
                type="text"
                class="search-bar__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.with(String::is_empty)>
                <button
                    class="search-bar__clear"
                    title="Clear search"
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
