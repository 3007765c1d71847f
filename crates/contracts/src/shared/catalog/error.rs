use thiserror::Error;

/// Ошибка загрузки списка товаров
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Сервер ответил не-2xx статусом
    #[error("Failed to fetch products")]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("Failed to parse products: {0}")]
    Parse(String),

    /// Запрос отменён более новым запросом или при размонтировании.
    /// Ошибкой для пользователя не является.
    #[error("request aborted")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}
