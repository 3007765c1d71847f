pub mod aggregate;
pub mod dto;

pub use aggregate::{category_label, format_price, Product, ProductId, StockStatus};
pub use dto::ProductsResponse;
