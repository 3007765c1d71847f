use contracts::domain::a001_product::{category_label, format_price, Product};
use leptos::prelude::*;

/// Карточка товара. Данные статичны, поэтому всё вычисляется один раз.
#[component]
#[allow(non_snake_case)]
pub fn ProductCard(product: Product) -> impl IntoView {
    let stock = product.stock_status();
    let discount = product.has_discount().then(|| product.discount_badge());
    let original_price = product.has_discount().then(|| format_price(product.price));
    let price = format_price(product.discounted_price());
    let category = category_label(&product.category);
    let brand = (!product.brand.is_empty()).then(|| product.brand.clone());
    let stars = product.stars();
    let rating = product.rating_label();
    let title = product.title.clone();

    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=product.thumbnail alt=title.clone() loading="lazy" />
                {discount.map(|badge| view! {
                    <span class="product-card__discount">{badge}</span>
                })}
            </div>

            <div class="product-card__body">
                <span class="product-card__category">{category}</span>
                <h3 class="product-card__title">{title}</h3>
                {brand.map(|brand| view! {
                    <p class="product-card__brand">{brand}</p>
                })}

                <div class="product-card__rating">
                    <span class="product-card__stars">{stars}</span>
                    <span class="product-card__rating-value">{rating}</span>
                </div>

                <div class="product-card__price">
                    {original_price.map(|original| view! {
                        <span class="product-card__price-original">{original}</span>
                    })}
                    <span class="product-card__price-current">{price}</span>
                </div>

                <span class=format!("product-card__stock {}", stock.css_class())>
                    {stock.label()}
                </span>
            </div>
        </div>
    }
}
