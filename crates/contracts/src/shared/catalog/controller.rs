use super::engine::apply_filters;
use super::filters::{FilterChange, FilterState, SortBy, SortOrder};
use super::reveal::{GrowTicket, RevealWindow};
use super::source::{CatalogSource, CommitOutcome};
use crate::domain::a001_product::Product;
use crate::shared::notification::{Notifier, Severity};

/// Текст уведомления при ошибке загрузки
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products";

/// Что показывать на странице
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Error(String),
    /// После фильтрации ничего не осталось
    Empty,
    Content,
}

/// Производный срез состояния каталога
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub filtered: Vec<Product>,
    pub visible: Vec<Product>,
    pub categories: Vec<String>,
}

/// Page-level orchestrator state: owns the filters and the reveal window.
///
/// Every filter mutation replaces a single key and resets the reveal window
/// to the first batch. Fetch failures are reported to the notifier once per
/// failed fetch generation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogController {
    filters: FilterState,
    reveal: RevealWindow,
    last_notified: Option<u64>,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(super::reveal::DEFAULT_BATCH)
    }
}

impl CatalogController {
    pub fn new(batch: usize) -> Self {
        Self {
            filters: FilterState::default(),
            reveal: RevealWindow::new(batch),
            last_notified: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn reveal(&self) -> &RevealWindow {
        &self.reveal
    }

    pub fn apply(&mut self, change: FilterChange) {
        self.filters = self.filters.with_change(change);
        self.reveal.reset();
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.apply(FilterChange::SortBy(sort_by));
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.apply(FilterChange::SortOrder(sort_order));
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.reveal.reset();
    }

    /// Реакция на итог запроса. Уведомляет только о новой неудаче.
    pub fn on_fetch_outcome(&mut self, outcome: &CommitOutcome, notifier: &dyn Notifier) {
        if let CommitOutcome::Failed { generation, message } = outcome {
            if self.last_notified == Some(*generation) {
                return;
            }
            self.last_notified = Some(*generation);
            log::debug!("fetch #{} failed: {}", generation, message);
            notifier.notify(FETCH_FAILED_MESSAGE, Severity::Error);
        }
    }

    pub fn render_state(&self, source: &CatalogSource, filtered_len: usize) -> RenderState {
        if let Some(message) = source.error() {
            RenderState::Error(message.to_string())
        } else if source.is_loading() {
            RenderState::Loading
        } else if filtered_len == 0 {
            RenderState::Empty
        } else {
            RenderState::Content
        }
    }

    /// Весь производный срез за один вызов, без реактивности.
    ///
    /// Страница собирает то же самое по шагам (`apply_filters`, затем
    /// `visible`), чтобы догрузка не пересчитывала фильтрацию; оба пути
    /// обязаны давать одинаковый результат.
    pub fn snapshot(&self, source: &CatalogSource, settled_search: &str) -> CatalogSnapshot {
        let filtered = apply_filters(source.products(), &self.filters, settled_search);
        let visible = self.reveal.visible_slice(&filtered).to_vec();
        CatalogSnapshot {
            filtered,
            visible,
            categories: source.categories().to_vec(),
        }
    }

    pub fn visible<'a>(&self, filtered: &'a [Product]) -> &'a [Product] {
        self.reveal.visible_slice(filtered)
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.reveal.has_more(filtered_len)
    }

    pub fn is_loading_more(&self) -> bool {
        self.reveal.is_loading_more()
    }

    pub fn begin_grow(&mut self, filtered_len: usize) -> Option<GrowTicket> {
        self.reveal.begin_grow(filtered_len)
    }

    pub fn complete_grow(&mut self, ticket: GrowTicket) -> bool {
        self.reveal.complete_grow(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{ProductId, ProductsResponse};
    use crate::shared::catalog::error::FetchError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        calls: RefCell<Vec<(String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.calls.borrow_mut().push((message.to_string(), severity));
        }
    }

    fn products(n: u64) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: ProductId::new(i),
                title: format!("Product {:03}", i),
                description: String::new(),
                price: 1.0 + i as f64,
                discount_percentage: 0.0,
                rating: 4.0,
                stock: 20,
                brand: String::new(),
                category: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                thumbnail: String::new(),
                images: Vec::new(),
            })
            .collect()
    }

    fn loaded_source(n: u64) -> CatalogSource {
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        source.commit(
            ticket,
            Ok(ProductsResponse {
                products: products(n),
                total: n as u32,
                skip: 0,
                limit: 1000,
            }),
        );
        source
    }

    #[test]
    fn test_first_batch_of_fifty() {
        let source = loaded_source(50);
        let controller = CatalogController::default();
        let snapshot = controller.snapshot(&source, "");
        assert_eq!(snapshot.filtered.len(), 50);
        assert_eq!(snapshot.visible.len(), 12);
        assert_eq!(snapshot.visible[0].title, "Product 000");
        assert_eq!(snapshot.categories, vec!["even".to_string(), "odd".to_string()]);
        assert!(controller.has_more(snapshot.filtered.len()));
        assert_eq!(controller.render_state(&source, 50), RenderState::Content);
    }

    #[test]
    fn test_snapshot_matches_stepwise_derivation() {
        let source = loaded_source(40);
        let mut controller = CatalogController::default();
        controller.apply(FilterChange::Category("even".to_string()));
        controller.set_sort_order(SortOrder::Desc);
        let t = controller.begin_grow(20).unwrap();
        controller.complete_grow(t);

        let snapshot = controller.snapshot(&source, "product 0");
        let filtered = apply_filters(source.products(), controller.filters(), "product 0");
        assert_eq!(snapshot.filtered, filtered);
        assert_eq!(snapshot.visible, controller.visible(&filtered).to_vec());
        assert_eq!(snapshot.visible.len(), 20);
        assert_eq!(snapshot.visible[0].title, "Product 038");
        assert_eq!(snapshot.categories, source.categories().to_vec());
    }

    #[test]
    fn test_filter_change_resets_window() {
        let source = loaded_source(100);
        let mut controller = CatalogController::default();
        for _ in 0..3 {
            let t = controller.begin_grow(100).unwrap();
            controller.complete_grow(t);
        }
        assert_eq!(controller.reveal().reveal_count(), 48);

        controller.apply(FilterChange::Category("odd".to_string()));
        assert_eq!(controller.reveal().reveal_count(), 12);
        let snapshot = controller.snapshot(&source, "");
        assert_eq!(snapshot.filtered.len(), 50);
        assert_eq!(snapshot.visible.len(), 12);
    }

    #[test]
    fn test_sort_change_also_resets_window() {
        let mut controller = CatalogController::default();
        let t = controller.begin_grow(40).unwrap();
        controller.complete_grow(t);
        controller.set_sort_order(SortOrder::Desc);
        assert_eq!(controller.reveal().reveal_count(), 12);
        assert_eq!(controller.filters().sort_order, SortOrder::Desc);
        controller.set_sort_by(SortBy::Price);
        assert_eq!(controller.filters().sort_by, SortBy::Price);
    }

    #[test]
    fn test_reset_filters() {
        let mut controller = CatalogController::default();
        controller.apply(FilterChange::MinRating(3));
        controller.apply(FilterChange::Search("phone".to_string()));
        controller.reset_filters();
        assert_eq!(controller.filters(), &FilterState::default());
    }

    #[test]
    fn test_failure_notifies_once_and_retry_success_does_not() {
        let notifier = RecordingNotifier::default();
        let mut controller = CatalogController::default();
        let mut source = CatalogSource::new();

        let ticket = source.begin();
        assert_eq!(controller.render_state(&source, 0), RenderState::Loading);
        let outcome = source.commit(ticket, Err(FetchError::Network("Failed to fetch".to_string())));
        controller.on_fetch_outcome(&outcome, &notifier);
        // повторная обработка того же итога не дублирует уведомление
        controller.on_fetch_outcome(&outcome, &notifier);
        assert_eq!(
            controller.render_state(&source, 0),
            RenderState::Error("Failed to fetch".to_string())
        );
        assert_eq!(
            notifier.calls.borrow().as_slice(),
            &[(FETCH_FAILED_MESSAGE.to_string(), Severity::Error)]
        );

        let retry = source.begin();
        let outcome = source.commit(
            retry,
            Ok(ProductsResponse {
                products: products(3),
                total: 3,
                skip: 0,
                limit: 1000,
            }),
        );
        controller.on_fetch_outcome(&outcome, &notifier);
        assert_eq!(controller.render_state(&source, 3), RenderState::Content);
        assert_eq!(notifier.calls.borrow().len(), 1);
    }

    #[test]
    fn test_failed_retry_notifies_again() {
        let notifier = RecordingNotifier::default();
        let mut controller = CatalogController::default();
        let mut source = CatalogSource::new();

        for _ in 0..2 {
            let ticket = source.begin();
            let outcome = source.commit(ticket, Err(FetchError::Status(502)));
            controller.on_fetch_outcome(&outcome, &notifier);
        }
        assert_eq!(notifier.calls.borrow().len(), 2);
    }

    #[test]
    fn test_cancellation_is_silent() {
        let notifier = RecordingNotifier::default();
        let mut controller = CatalogController::default();
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        let outcome = source.commit(ticket, Err(FetchError::Cancelled));
        controller.on_fetch_outcome(&outcome, &notifier);
        assert!(notifier.calls.borrow().is_empty());
        assert_eq!(controller.render_state(&source, 0), RenderState::Empty);
    }

    #[test]
    fn test_empty_result_state() {
        let source = loaded_source(10);
        let mut controller = CatalogController::default();
        controller.apply(FilterChange::Category("missing".to_string()));
        let snapshot = controller.snapshot(&source, "");
        assert!(snapshot.filtered.is_empty());
        assert_eq!(controller.render_state(&source, snapshot.filtered.len()), RenderState::Empty);
    }
}
