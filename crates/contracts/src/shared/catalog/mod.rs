//! Catalog query pipeline: debounced search, filtering and sorting,
//! incremental reveal and the fetch lifecycle feeding it.
//!
//! Everything here is platform independent and driven by explicit
//! timestamps/tickets; the frontend hooks attach browser timers,
//! `fetch` and `IntersectionObserver` to these state machines.

pub mod controller;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod filters;
pub mod reveal;
pub mod scroll_gate;
pub mod source;

pub use controller::{CatalogController, CatalogSnapshot, RenderState, FETCH_FAILED_MESSAGE};
pub use debounce::{DebounceTicket, Debouncer};
pub use engine::apply_filters;
pub use error::FetchError;
pub use filters::{
    parse_price_input, rating_button_label, FilterChange, FilterState, PriceBound, SortBy,
    SortOrder, MAX_PRICE, MAX_RATING_FLOOR,
};
pub use reveal::{GrowTicket, RevealWindow, DEFAULT_BATCH};
pub use scroll_gate::ScrollGate;
pub use source::{derive_categories, CatalogSource, CommitOutcome, FetchPhase, FetchTicket};
