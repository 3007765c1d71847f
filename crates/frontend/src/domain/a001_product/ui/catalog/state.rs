use contracts::shared::catalog::CatalogController;
use leptos::prelude::*;

pub fn create_state(batch_size: usize) -> RwSignal<CatalogController> {
    RwSignal::new(CatalogController::new(batch_size))
}
