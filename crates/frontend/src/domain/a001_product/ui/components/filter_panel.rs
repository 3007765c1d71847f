use contracts::domain::a001_product::category_label;
use contracts::shared::catalog::{
    parse_price_input, rating_button_label, FilterChange, FilterState, PriceBound,
    MAX_RATING_FLOOR,
};
use leptos::prelude::*;

/// Сворачиваемая панель фильтров: категория, диапазон цены, минимальный рейтинг.
///
/// Панель не хранит значения фильтров, только состояние раскрытия;
/// каждое изменение уходит наружу одним `FilterChange`.
#[component]
#[allow(non_snake_case)]
pub fn FilterPanel(
    #[prop(into)] filters: Signal<FilterState>,
    #[prop(into)] categories: Signal<Vec<String>>,
    on_filter_change: Callback<FilterChange>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let (is_expanded, set_is_expanded) = signal(true);

    let toggle_expanded = move |_| set_is_expanded.update(|e| *e = !*e);

    let on_category = move |ev| {
        on_filter_change.run(FilterChange::Category(event_target_value(&ev)));
    };

    // Нечисловой ввод игнорируется, пустой возвращает границу по умолчанию
    let on_price = move |bound: PriceBound, raw: String| {
        if let Some(change) = parse_price_input(bound, &raw) {
            on_filter_change.run(change);
        }
    };

    view! {
        <aside class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <span class="filter-panel__title">"Filters"</span>
                <span class="filter-panel__toggle">
                    {move || if is_expanded.get() { "−" } else { "+" }}
                </span>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    <div class="filter-group">
                        <label class="filter-group__label">"Category"</label>
                        <select
                            class="filter-group__select"
                            prop:value=move || filters.with(|f| f.category.clone())
                            on:change=on_category
                        >
                            <option value="">"All Categories"</option>
                            <For
                                each=move || categories.get()
                                key=|slug| slug.clone()
                                children=move |slug| {
                                    let label = category_label(&slug);
                                    let selected_slug = slug.clone();
                                    view! {
                                        <option
                                            value=slug
                                            selected=move || filters.with(|f| f.category == selected_slug)
                                        >
                                            {label}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="filter-group">
                        <label class="filter-group__label">"Price Range"</label>
                        <div class="filter-group__range">
                            <input
                                type="number"
                                min="0"
                                placeholder="Min"
                                class="filter-group__input"
                                prop:value=move || filters.with(FilterState::min_price_input)
                                on:input=move |ev| on_price(PriceBound::Min, event_target_value(&ev))
                            />
                            <span class="filter-group__dash">"-"</span>
                            <input
                                type="number"
                                min="0"
                                placeholder="Max"
                                class="filter-group__input"
                                prop:value=move || filters.with(FilterState::max_price_input)
                                on:input=move |ev| on_price(PriceBound::Max, event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="filter-group">
                        <label class="filter-group__label">"Minimum Rating"</label>
                        <div class="filter-group__ratings">
                            {(0..=MAX_RATING_FLOOR)
                                .map(move |rating| {
                                    view! {
                                        <button
                                            class=move || {
                                                if filters.with(|f| f.min_rating == rating) {
                                                    "rating-button rating-button--active"
                                                } else {
                                                    "rating-button"
                                                }
                                            }
                                            on:click=move |_| {
                                                on_filter_change.run(FilterChange::MinRating(rating))
                                            }
                                        >
                                            {rating_button_label(rating)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Show when=move || filters.with(FilterState::has_active_filters)>
                        <button
                            class="btn btn-secondary filter-panel__reset"
                            on:click=move |_| on_reset.run(())
                        >
                            "Clear All Filters"
                        </button>
                    </Show>
                </div>
            </Show>
        </aside>
    }
}
