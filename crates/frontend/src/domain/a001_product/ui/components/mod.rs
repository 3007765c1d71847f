pub mod filter_panel;
pub mod product_card;
pub mod product_grid;
pub mod search_bar;
pub mod sort_dropdown;

pub use filter_panel::FilterPanel;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use search_bar::SearchBar;
pub use sort_dropdown::SortDropdown;
