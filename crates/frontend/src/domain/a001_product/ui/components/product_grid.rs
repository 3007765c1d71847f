use super::ProductCard;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product /> }
            />
        </div>
    }
}
