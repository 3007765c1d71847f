//! Filtering and sorting of the fetched product set.
//!
//! `apply_filters` is a pure function of `(products, filters, settled_search)`:
//! predicates form a conjunction, run before the sort, and the sort is stable
//! in both directions so incremental reveal always pages in the same order.

use super::filters::{FilterState, SortBy, SortOrder};
use crate::domain::a001_product::Product;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Возвращает новый отфильтрованный и отсортированный список
pub fn apply_filters(products: &[Product], filters: &FilterState, settled_search: &str) -> Vec<Product> {
    let search_lower = settled_search.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| search_lower.is_empty() || matches_search(p, &search_lower))
        .filter(|p| filters.category.is_empty() || p.category == filters.category)
        .filter(|p| p.price >= filters.min_price && p.price <= filters.max_price)
        .filter(|p| filters.min_rating == 0 || p.rating >= f64::from(filters.min_rating))
        .cloned()
        .collect();

    // sort_by стабильна; для desc разворачиваем сравнение, а не результат,
    // иначе равные элементы поменяются местами
    result.sort_by(|a, b| {
        let ord = compare_by(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    result
}

/// `search_lower` уже в нижнем регистре
fn matches_search(product: &Product, search_lower: &str) -> bool {
    product.title.to_lowercase().contains(search_lower)
        || product.description.to_lowercase().contains(search_lower)
        || product.brand.to_lowercase().contains(search_lower)
        || product.category.to_lowercase().contains(search_lower)
}

fn compare_by(a: &Product, b: &Product, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Title => compare_text(&a.title, &b.title),
        SortBy::Price => a.price.total_cmp(&b.price),
        SortBy::Rating => a.rating.total_cmp(&b.rating),
    }
}

/// Сравнение строк «как в локали», по уровням:
/// 1. базовые буквы без диакритики и регистра; пробелы и знаки
///    идут раньше цифр, цифры раньше букв;
/// 2. диакритика: буква без знака раньше буквы со знаком;
/// 3. регистр: строчная раньше заглавной.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}
