//! Reactive hooks that drive the catalog state machines from `contracts`
//! with browser timers, `fetch` and `IntersectionObserver`.

pub mod use_debounce;
pub mod use_infinite_scroll;
pub mod use_products;

pub use use_debounce::{use_debounce, Debounced};
pub use use_infinite_scroll::use_infinite_scroll;
pub use use_products::{use_products, ProductsResource};
