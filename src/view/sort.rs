//! Display list derivation.
//!
//! Sort criteria have a fixed precedence, lowest to highest:
//! name < price < rating. The active comparators are collected highest
//! priority first and folded into one stable sort, which orders the list
//! exactly as re-sorting by name, then price, then rating would.

use std::cmp::Ordering;

use crate::catalog::Product;

use super::{FilterState, NameOrder, PriceOrder, RatingOrder};

/// A single active sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    RatingAscending,
    RatingDescending,
    PriceAscending,
    PriceDescending,
    TitleAscending,
    TitleDescending,
}

impl Comparator {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Comparator::RatingAscending => a.rating.total_cmp(&b.rating),
            Comparator::RatingDescending => b.rating.total_cmp(&a.rating),
            Comparator::PriceAscending => a.price.total_cmp(&b.price),
            Comparator::PriceDescending => b.price.total_cmp(&a.price),
            Comparator::TitleAscending => compare_titles(&a.title, &b.title),
            Comparator::TitleDescending => compare_titles(&b.title, &a.title),
        }
    }
}

/// Active comparators for `filters`, highest priority first
pub fn active_comparators(filters: &FilterState) -> Vec<Comparator> {
    let mut comparators = Vec::with_capacity(3);

    match filters.rating_order {
        RatingOrder::OneToFive => comparators.push(Comparator::RatingAscending),
        RatingOrder::FiveToOne => comparators.push(Comparator::RatingDescending),
        RatingOrder::Default => {}
    }
    match filters.price_order {
        PriceOrder::LowToHigh => comparators.push(Comparator::PriceAscending),
        PriceOrder::HighToLow => comparators.push(Comparator::PriceDescending),
        PriceOrder::Default => {}
    }
    match filters.name_order {
        NameOrder::AToZ => comparators.push(Comparator::TitleAscending),
        NameOrder::ZToA => comparators.push(Comparator::TitleDescending),
        NameOrder::All => {}
    }

    comparators
}

/// Compare titles ignoring case first. Titles differing only in case put
/// the lowercase spelling first ("apple" before "Apple"), the way
/// locale-aware collation does.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| invert_case(a).cmp(&invert_case(b)))
}

fn invert_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_lowercase() {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_lowercase().collect::<String>()
            }
        })
        .collect()
}

/// Case-insensitive substring match.
///
/// An all-whitespace term matches everything. Otherwise the term is used
/// as typed, surrounding whitespace included.
pub fn title_matches(title: &str, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    title.to_lowercase().contains(&term.to_lowercase())
}

/// Derive the display list from the catalog and the current filters.
///
/// Pure: never mutates `catalog`, and every returned reference points
/// into it, so the result is always a subset/permutation of the catalog.
pub fn derive_display_list<'a>(catalog: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = catalog
        .iter()
        .filter(|p| title_matches(&p.title, &filters.search_term))
        .collect();

    let comparators = active_comparators(filters);
    if !comparators.is_empty() {
        products.sort_by(|a, b| {
            comparators
                .iter()
                .map(|c| c.compare(a, b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        });
    }

    products
}
