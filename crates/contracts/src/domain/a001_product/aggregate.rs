use serde::{Deserialize, Serialize};

/// Порог «много на складе»: выше него остаток не показывается
const STOCK_LOW_THRESHOLD: u32 = 10;
const MAX_STARS: usize = 5;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога. После загрузки не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(rename = "discountPercentage", default)]
    pub discount_percentage: f64,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub stock: u32,

    // У части товаров бренд отсутствует
    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub images: Vec<String>,
}

/// Состояние остатка для карточки товара
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    Low(u32),
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> String {
        match self {
            StockStatus::InStock => "In Stock".to_string(),
            StockStatus::Low(left) => format!("Only {} left", left),
            StockStatus::OutOfStock => "Out of Stock".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-available",
            StockStatus::Low(_) => "stock-low",
            StockStatus::OutOfStock => "stock-out",
        }
    }
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Цена с учётом скидки
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }

    /// Текст бейджа скидки, например "-13%"
    pub fn discount_badge(&self) -> String {
        format!("-{}%", self.discount_percentage.round() as i64)
    }

    /// Рейтинг звёздами: округлённое число "★", остальное "☆"
    pub fn stars(&self) -> String {
        let filled = (self.rating.round().max(0.0) as usize).min(MAX_STARS);
        format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.stock > STOCK_LOW_THRESHOLD {
            StockStatus::InStock
        } else if self.stock > 0 {
            StockStatus::Low(self.stock)
        } else {
            StockStatus::OutOfStock
        }
    }
}

/// Форматирование цены: "$12.50"
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Человекочитаемое название категории: "home-decoration" -> "Home decoration"
pub fn category_label(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.replace('-', " "))
        }
        None => String::new(),
    }
}
