use serde::{Deserialize, Serialize};

/// Верхняя граница цены по умолчанию, означает «без ограничения».
/// Граница включительная: товары дороже неё отсекаются даже без фильтра.
pub const MAX_PRICE: f64 = 10000.0;
pub const MAX_RATING_FLOOR: u8 = 4;

/// Поле сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Title,
    Price,
    Rating,
}

impl SortBy {
    pub fn code(&self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::Price => "price",
            SortBy::Rating => "rating",
        }
    }

    /// Подпись в выпадающем списке
    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Title => "Name",
            SortBy::Price => "Price",
            SortBy::Rating => "Rating",
        }
    }

    pub fn all() -> Vec<SortBy> {
        vec![SortBy::Title, SortBy::Price, SortBy::Rating]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "title" => Some(SortBy::Title),
            "price" => Some(SortBy::Price),
            "rating" => Some(SortBy::Rating),
            _ => None,
        }
    }
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

/// Состояние фильтров каталога.
///
/// `min_price <= max_price` не проверяется, это ответственность вызывающего.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    #[serde(rename = "minPrice")]
    pub min_price: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
    #[serde(rename = "minRating")]
    pub min_rating: u8,
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
    #[serde(rename = "sortOrder")]
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            min_price: 0.0,
            max_price: MAX_PRICE,
            min_rating: 0,
            sort_by: SortBy::Title,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Изменение одного ключа фильтра (`onFilterChange(key, value)`)
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Category(String),
    MinPrice(f64),
    MaxPrice(f64),
    MinRating(u8),
    SortBy(SortBy),
    SortOrder(SortOrder),
}

impl FilterState {
    /// Возвращает новое состояние с заменённым ключом; `self` не меняется
    pub fn with_change(&self, change: FilterChange) -> Self {
        let mut next = self.clone();
        match change {
            FilterChange::Search(value) => next.search = value,
            FilterChange::Category(value) => next.category = value,
            FilterChange::MinPrice(value) => next.min_price = value,
            FilterChange::MaxPrice(value) => next.max_price = value,
            FilterChange::MinRating(value) => next.min_rating = value.min(MAX_RATING_FLOOR),
            FilterChange::SortBy(value) => next.sort_by = value,
            FilterChange::SortOrder(value) => next.sort_order = value,
        }
        next
    }

    /// Активны ли фильтры панели (поиск и сортировка не считаются)
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_empty()
            || self.min_price > 0.0
            || self.max_price < MAX_PRICE
            || self.min_rating > 0
    }

    /// Значение поля "Min" для отображения: 0 показывается пустым
    pub fn min_price_input(&self) -> String {
        if self.min_price == 0.0 {
            String::new()
        } else {
            self.min_price.to_string()
        }
    }

    /// Значение поля "Max" для отображения: граница по умолчанию показывается пустой
    pub fn max_price_input(&self) -> String {
        if self.max_price == MAX_PRICE {
            String::new()
        } else {
            self.max_price.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Разбор ввода цены. Пустая строка даёт значение по умолчанию для границы,
/// нечисловой ввод игнорируется (`None`).
pub fn parse_price_input(bound: PriceBound, raw: &str) -> Option<FilterChange> {
    let raw = raw.trim();
    let value = if raw.is_empty() {
        match bound {
            PriceBound::Min => 0.0,
            PriceBound::Max => MAX_PRICE,
        }
    } else {
        raw.parse::<f64>().ok().filter(|v| v.is_finite())?
    };
    Some(match bound {
        PriceBound::Min => FilterChange::MinPrice(value),
        PriceBound::Max => FilterChange::MaxPrice(value),
    })
}

/// Подпись кнопки минимального рейтинга
pub fn rating_button_label(rating: u8) -> String {
    if rating == 0 {
        "All".to_string()
    } else {
        format!("{}+★", rating)
    }
}
