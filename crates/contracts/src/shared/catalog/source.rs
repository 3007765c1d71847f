//! Fetch lifecycle of the product set.
//!
//! Every started fetch receives a ticket carrying a generation number. Only
//! the ticket of the most recent fetch may commit; results of superseded or
//! torn-down fetches are dropped, and a cancellation is never reported as an
//! error.

use super::error::FetchError;
use crate::domain::a001_product::{Product, ProductsResponse};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Билет запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Итог применения результата запроса
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Билет не последний, результат проигнорирован
    Stale,
    Cancelled,
    Loaded { count: usize },
    Failed { generation: u64, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSource {
    products: Vec<Product>,
    categories: Vec<String>,
    phase: FetchPhase,
    // фаза до начала текущего запроса, восстанавливается при отмене
    settled_phase: FetchPhase,
    generation: u64,
    active: Option<u64>,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            phase: FetchPhase::Idle,
            settled_phase: FetchPhase::Idle,
            generation: 0,
            active: None,
        }
    }

    /// Начать запрос: предыдущий билет устаревает, ошибка сбрасывается.
    /// Ранее загруженные товары остаются доступны до следующего успеха.
    pub fn begin(&mut self) -> FetchTicket {
        if self.phase != FetchPhase::Loading {
            self.settled_phase = match &self.phase {
                FetchPhase::Error(_) => FetchPhase::Idle,
                other => other.clone(),
            };
        }
        self.generation += 1;
        self.active = Some(self.generation);
        self.phase = FetchPhase::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    pub fn commit(
        &mut self,
        ticket: FetchTicket,
        result: Result<ProductsResponse, FetchError>,
    ) -> CommitOutcome {
        if self.active != Some(ticket.generation) {
            return CommitOutcome::Stale;
        }
        self.active = None;

        match result {
            Ok(response) => {
                let count = response.products.len();
                self.categories = derive_categories(&response.products);
                self.products = response.products;
                self.phase = FetchPhase::Success;
                CommitOutcome::Loaded { count }
            }
            Err(FetchError::Cancelled) => {
                self.phase = self.settled_phase.clone();
                CommitOutcome::Cancelled
            }
            Err(err) => {
                let message = err.to_string();
                self.phase = FetchPhase::Error(message.clone());
                CommitOutcome::Failed {
                    generation: ticket.generation,
                    message,
                }
            }
        }
    }

    /// Размонтирование: текущий билет больше не сможет ничего записать
    pub fn cancel(&mut self) {
        self.active = None;
        if self.phase == FetchPhase::Loading {
            self.phase = self.settled_phase.clone();
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FetchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Отсортированный список уникальных непустых категорий
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter(|p| !p.category.is_empty())
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            description: String::new(),
            price: 10.0,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 3,
            brand: String::new(),
            category: category.to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    fn response(products: Vec<Product>) -> ProductsResponse {
        let total = products.len() as u32;
        ProductsResponse {
            products,
            total,
            skip: 0,
            limit: 1000,
        }
    }

    #[test]
    fn test_success_stores_products_and_categories() {
        let mut source = CatalogSource::new();
        assert_eq!(source.phase(), &FetchPhase::Idle);

        let ticket = source.begin();
        assert!(source.is_loading());

        let outcome = source.commit(
            ticket,
            Ok(response(vec![
                product(1, "laptops"),
                product(2, "beauty"),
                product(3, ""),
                product(4, "laptops"),
            ])),
        );
        assert_eq!(outcome, CommitOutcome::Loaded { count: 4 });
        assert_eq!(source.phase(), &FetchPhase::Success);
        assert_eq!(source.products().len(), 4);
        assert_eq!(source.categories(), &["beauty".to_string(), "laptops".to_string()]);
        assert_eq!(source.error(), None);
    }

    #[test]
    fn test_superseded_fetch_never_commits() {
        let mut source = CatalogSource::new();
        let first = source.begin();
        let second = source.begin();

        // первый запрос завершился позже второго, но он устарел
        let late = source.commit(first, Ok(response(vec![product(1, "old")])));
        assert_eq!(late, CommitOutcome::Stale);
        assert!(source.is_loading());
        assert!(source.products().is_empty());

        let outcome = source.commit(second, Ok(response(vec![product(2, "new")])));
        assert_eq!(outcome, CommitOutcome::Loaded { count: 1 });
        assert_eq!(source.categories(), &["new".to_string()]);

        assert_eq!(
            source.commit(first, Err(FetchError::Network("boom".to_string()))),
            CommitOutcome::Stale
        );
        assert_eq!(source.error(), None);
    }

    #[test]
    fn test_failure_then_retry() {
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        let outcome = source.commit(ticket, Err(FetchError::Network("Failed to fetch".to_string())));
        assert_eq!(
            outcome,
            CommitOutcome::Failed {
                generation: 1,
                message: "Failed to fetch".to_string()
            }
        );
        assert_eq!(source.error(), Some("Failed to fetch"));
        assert!(!source.is_loading());

        let retry = source.begin();
        assert_eq!(source.error(), None);
        assert!(source.is_loading());
        source.commit(retry, Ok(response(vec![product(1, "beauty")])));
        assert_eq!(source.phase(), &FetchPhase::Success);
    }

    #[test]
    fn test_status_error_message() {
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        source.commit(ticket, Err(FetchError::Status(500)));
        assert_eq!(source.error(), Some("Failed to fetch products"));
    }

    #[test]
    fn test_cancellation_is_not_an_error() {
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        source.commit(ticket, Ok(response(vec![product(1, "beauty")])));

        let ticket = source.begin();
        assert_eq!(source.commit(ticket, Err(FetchError::Cancelled)), CommitOutcome::Cancelled);
        assert_eq!(source.phase(), &FetchPhase::Success);
        assert_eq!(source.error(), None);
        assert_eq!(source.products().len(), 1);
    }

    #[test]
    fn test_cancel_on_teardown_blocks_late_commit() {
        let mut source = CatalogSource::new();
        let ticket = source.begin();
        source.cancel();
        assert!(!source.is_loading());
        assert_eq!(
            source.commit(ticket, Ok(response(vec![product(1, "beauty")]))),
            CommitOutcome::Stale
        );
        assert!(source.products().is_empty());
    }

    #[test]
    fn test_new_fetch_replaces_products_wholesale() {
        let mut source = CatalogSource::new();
        let t = source.begin();
        source.commit(t, Ok(response(vec![product(1, "a"), product(2, "b")])));
        let t = source.begin();
        // пока идёт повторный запрос, старые данные доступны
        assert_eq!(source.products().len(), 2);
        source.commit(t, Ok(response(vec![product(3, "c")])));
        assert_eq!(source.products().len(), 1);
        assert_eq!(source.products()[0].id, ProductId::new(3));
        assert_eq!(source.categories(), &["c".to_string()]);
    }
}
