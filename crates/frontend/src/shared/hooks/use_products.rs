use crate::domain::a001_product::api::fetch_products;
use contracts::shared::catalog::{CatalogSource, CommitOutcome};
use contracts::shared::config::ApiConfig;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

/// Источник товаров: состояние загрузки, результат и повторный запрос.
///
/// Одновременно выполняется не больше одного запроса: новый запрос
/// прерывает предыдущий через `AbortController`, а результат устаревшего
/// запроса отбрасывается по номеру поколения.
#[derive(Clone, Copy)]
pub struct ProductsResource {
    state: RwSignal<CatalogSource>,
    last_outcome: RwSignal<Option<CommitOutcome>>,
    abort: StoredValue<Option<AbortController>, LocalStorage>,
    url: StoredValue<String>,
}

impl ProductsResource {
    fn new(url: String) -> Self {
        Self {
            state: RwSignal::new(CatalogSource::new()),
            last_outcome: RwSignal::new(None),
            abort: StoredValue::new_local(None),
            url: StoredValue::new(url),
        }
    }

    /// Состояние жизненного цикла (только чтение)
    pub fn state(&self) -> ReadSignal<CatalogSource> {
        self.state.read_only()
    }

    /// Итог последнего завершённого запроса
    pub fn last_outcome(&self) -> ReadSignal<Option<CommitOutcome>> {
        self.last_outcome.read_only()
    }

    pub fn categories(&self) -> Vec<String> {
        self.state.with(|s| s.categories().to_vec())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    /// Запустить загрузку заново. Предыдущий запрос прерывается.
    pub fn refetch(&self) {
        let this = *self;

        this.abort_in_flight();
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                log::warn!("AbortController unavailable: {:?}", err);
                None
            }
        };
        let signal = controller.as_ref().map(|c| c.signal());
        this.abort.set_value(controller);

        let Some(ticket) = this.state.try_update(|s| s.begin()) else {
            return;
        };
        let url = this.url.get_value();
        log::info!("fetch #{} started: {}", ticket.generation(), url);

        spawn_local(async move {
            let result = fetch_products(&url, signal.as_ref()).await;
            let Some(outcome) = this.state.try_update(|s| s.commit(ticket, result)) else {
                return;
            };

            match &outcome {
                CommitOutcome::Loaded { count } => {
                    log::info!("fetch #{} loaded {} products", ticket.generation(), count)
                }
                CommitOutcome::Failed { message, .. } => {
                    log::warn!("fetch #{} failed: {}", ticket.generation(), message)
                }
                CommitOutcome::Cancelled | CommitOutcome::Stale => {
                    log::debug!("fetch #{} superseded", ticket.generation());
                    return;
                }
            }
            this.last_outcome.try_set(Some(outcome));
        });
    }

    fn abort_in_flight(&self) {
        if let Some(previous) = self.abort.try_update_value(|a| a.take()).flatten() {
            previous.abort();
        }
    }

    /// Размонтирование: прервать запрос, запретить запись результата
    fn cancel(&self) {
        self.abort_in_flight();
        self.state.try_update(|s| s.cancel());
    }
}

/// Загрузить товары при первом использовании; на размонтировании
/// незавершённый запрос прерывается.
pub fn use_products(api: &ApiConfig) -> ProductsResource {
    let resource = ProductsResource::new(api.products_url());
    resource.refetch();

    on_cleanup(move || resource.cancel());

    resource
}
