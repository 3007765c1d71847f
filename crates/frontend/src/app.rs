use crate::domain::a001_product::ui::catalog::ProductCatalogPage;
use crate::layout::header::Header;
use crate::layout::notification::{NotificationHost, NotificationService};
use contracts::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Единый сервис уведомлений для всего приложения
    provide_context(NotificationService::new(config.notification.ttl_ms));
    provide_context(config);

    view! {
        <div class="app-layout">
            <Header title="Uni Mart Shopping" />

            <main class="main-content">
                <ProductCatalogPage />
            </main>

            <NotificationHost />
        </div>
    }
}
