use contracts::shared::catalog::{SortBy, SortOrder};
use leptos::prelude::*;

/// Выбор поля сортировки и переключатель направления
#[component]
#[allow(non_snake_case)]
pub fn SortDropdown(
    #[prop(into)] sort_by: Signal<SortBy>,
    #[prop(into)] sort_order: Signal<SortOrder>,
    on_sort_by_change: Callback<SortBy>,
    on_sort_order_change: Callback<SortOrder>,
) -> impl IntoView {
    let on_select = move |ev| {
        let code = event_target_value(&ev);
        match SortBy::from_code(&code) {
            Some(value) => on_sort_by_change.run(value),
            None => log::warn!("unknown sort field: {}", code),
        }
    };

    view! {
        <div class="sort-dropdown">
            <label class="sort-dropdown__label">"Sort by:"</label>
            <select
                class="sort-dropdown__select"
                prop:value=move || sort_by.get().code()
                on:change=on_select
            >
                {SortBy::all()
                    .into_iter()
                    .map(move |option| {
                        view! {
                            <option
                                value=option.code()
                                selected=move || sort_by.get() == option
                            >
                                {option.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                class="sort-dropdown__order"
                title=move || sort_order.get().title()
                on:click=move |_| on_sort_order_change.run(sort_order.get_untracked().toggled())
            >
                {move || sort_order.get().arrow()}
            </button>
        </div>
    }
}
