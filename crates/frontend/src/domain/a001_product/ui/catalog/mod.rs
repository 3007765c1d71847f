pub mod state;

use crate::domain::a001_product::ui::components::{
    FilterPanel, ProductGrid, SearchBar, SortDropdown,
};
use crate::layout::notification::NotificationService;
use crate::shared::hooks::{use_debounce, use_infinite_scroll, use_products};
use contracts::domain::a001_product::Product;
use contracts::shared::catalog::{apply_filters, FilterChange, RenderState, SortBy, SortOrder};
use contracts::shared::config::Config;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Страница каталога: фильтры, поиск с задержкой, сортировка
/// и бесконечная прокрутка результатов.
#[component]
#[allow(non_snake_case)]
pub fn ProductCatalogPage() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let notifier = use_context::<NotificationService>()
        .expect("NotificationService context not found");

    let products = use_products(&config.api);
    let controller = state::create_state(config.catalog.batch_size);

    // Поиск: сырой ввод в фильтрах, в выборку попадает устоявшееся значение
    let search = Signal::derive(move || controller.with(|c| c.filters().search.clone()));
    let debounced = use_debounce(search, config.catalog.debounce_ms);

    let filters = Memo::new(move |_| controller.with(|c| c.filters().clone()));
    let categories = Memo::new(move |_| products.categories());

    // Пересчёт только при изменении товаров, фильтров или устоявшегося поиска
    let filtered = Memo::new(move |_| {
        let settled = debounced.settled.get();
        filters.with(|f| {
            products
                .state()
                .with(|s| apply_filters(s.products(), f, &settled))
        })
    });
    let filtered_len = Memo::new(move |_| filtered.with(Vec::len));

    let visible = Memo::new(move |_| {
        filtered.with(|list| controller.with(|c| c.visible(list).to_vec()))
    });
    let has_more = Memo::new(move |_| {
        let len = filtered_len.get();
        controller.with(|c| c.has_more(len))
    });
    let is_loading_more = Memo::new(move |_| controller.with(|c| c.is_loading_more()));

    let error = Memo::new(move |_| products.error());
    let render_state = Memo::new(move |_| {
        let len = filtered_len.get();
        products
            .state()
            .with(|s| controller.with(|c| c.render_state(s, len)))
    });

    // Уведомление об ошибке загрузки: один раз на каждый неудачный запрос
    Effect::new(move |_| {
        if let Some(outcome) = products.last_outcome().get() {
            controller.update(|c| c.on_fetch_outcome(&outcome, &notifier));
        }
    });

    // Обработчики фильтров: каждый сбрасывает окно к первой порции
    let on_filter_change = Callback::new(move |change: FilterChange| {
        controller.update(|c| c.apply(change));
    });
    let on_reset = Callback::new(move |_: ()| {
        controller.update(|c| c.reset_filters());
    });
    let on_sort_by_change = Callback::new(move |sort_by: SortBy| {
        controller.update(|c| c.set_sort_by(sort_by));
    });
    let on_sort_order_change = Callback::new(move |sort_order: SortOrder| {
        controller.update(|c| c.set_sort_order(sort_order));
    });

    // Догрузка следующей порции с имитацией сетевой задержки
    let grow_delay_ms = config.catalog.grow_delay_ms;
    let load_more = Callback::new(move |_: ()| {
        let len = filtered_len.get_untracked();
        let Some(ticket) = controller.try_update(|c| c.begin_grow(len)).flatten() else {
            return;
        };
        log::debug!(
            "loading more after {} of {}",
            controller.with_untracked(|c| c.reveal().reveal_count()),
            len
        );
        spawn_local(async move {
            TimeoutFuture::new(grow_delay_ms).await;
            // после сброса фильтров или размонтирования билет недействителен
            controller.try_update(|c| c.complete_grow(ticket));
        });
    });

    let sentinel = NodeRef::<html::Div>::new();
    use_infinite_scroll(sentinel, has_more.into(), load_more, &config.scroll);

    let retry = move |_| products.refetch();

    view! {
        <div class="catalog-page">
            <h2 class="page-title">"Product Catalog"</h2>

            {move || match error.get() {
                Some(message) => view! {
                    <div class="catalog-error">
                        <span class="catalog-error-icon">"⚠️"</span>
                        <h3>"Failed to load products"</h3>
                        <p>{message}</p>
                        <button class="btn btn-primary" on:click=retry>
                            "Try Again"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="catalog-toolbar">
                        <SearchBar
                            value=search
                            on_change=Callback::new(move |value: String| {
                                on_filter_change.run(FilterChange::Search(value))
                            })
                        />
                        <SortDropdown
                            sort_by=Signal::derive(move || filters.with(|f| f.sort_by))
                            sort_order=Signal::derive(move || filters.with(|f| f.sort_order))
                            on_sort_by_change=on_sort_by_change
                            on_sort_order_change=on_sort_order_change
                        />
                    </div>

                    <div class="catalog-layout">
                        <FilterPanel
                            filters=filters
                            categories=categories
                            on_filter_change=on_filter_change
                            on_reset=on_reset
                        />

                        <main class="catalog-main">
                            {move || match render_state.get() {
                                RenderState::Loading | RenderState::Error(_) => view! {
                                    <div class="catalog-loading">
                                        <div class="loading-spinner"></div>
                                        <p>"Loading products...."</p>
                                    </div>
                                }
                                .into_any(),
                                RenderState::Empty => view! {
                                    <div class="catalog-empty">
                                        <span class="catalog-empty-icon">"📦"</span>
                                        <h3>"No products found"</h3>
                                        <p>"Try adjusting your search or filter criteria"</p>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| on_reset.run(())
                                        >
                                            "Clear Filters"
                                        </button>
                                    </div>
                                }
                                .into_any(),
                                RenderState::Content => view! {
                                    <CatalogContent
                                        visible=visible
                                        filtered_len=filtered_len
                                        is_searching=debounced.is_pending
                                        is_loading_more=is_loading_more
                                        sentinel=sentinel
                                    />
                                }
                                .into_any(),
                            }}
                        </main>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Результаты: счётчик, сетка видимых товаров и сентинел прокрутки
#[component]
fn CatalogContent(
    #[prop(into)] visible: Signal<Vec<Product>>,
    #[prop(into)] filtered_len: Signal<usize>,
    #[prop(into)] is_searching: Signal<bool>,
    #[prop(into)] is_loading_more: Signal<bool>,
    sentinel: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div class="catalog-results-info">
            <span>{move || format!("{} products found", filtered_len.get())}</span>
            <Show when=move || is_searching.get()>
                <span class="catalog-searching">"Searching..."</span>
            </Show>
        </div>

        <div class="catalog-products-container">
            <Show when=move || is_searching.get()>
                <div class="catalog-overlay-loader">
                    <div class="loading-spinner"></div>
                </div>
            </Show>

            <ProductGrid products=visible />
        </div>

        // Сентинел бесконечной прокрутки
        <div node_ref=sentinel style="height: 1px;"></div>

        <Show when=move || is_loading_more.get()>
            <div class="catalog-loading-more">
                <div class="loading-spinner"></div>
                <p>"Loading more products..."</p>
            </div>
        </Show>
    }
}
