//! View state: search text and the three sort criteria.
//!
//! [`ViewController`] owns a [`FilterState`] and exposes discrete mutators;
//! the display list itself is produced by the pure
//! [`derive_display_list`] function in [`sort`].

pub mod sort;

use crate::catalog::Product;
use crate::error::StorefrontError;

pub use sort::{Comparator, active_comparators, derive_display_list, title_matches};

/// Name ordering option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameOrder {
    #[default]
    All,
    AToZ,
    ZToA,
}

enum_display_fromstr!(
    NameOrder,
    StorefrontError::InvalidNameOrder,
    {
        All => "all",
        AToZ => "a-z",
        ZToA => "z-a",
    }
);

impl NameOrder {
    /// Label shown in the filter control
    pub fn label(self) -> &'static str {
        match self {
            NameOrder::All => "All",
            NameOrder::AToZ => "A-Z",
            NameOrder::ZToA => "Z-A",
        }
    }
}

/// Price ordering option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceOrder {
    #[default]
    Default,
    LowToHigh,
    HighToLow,
}

enum_display_fromstr!(
    PriceOrder,
    StorefrontError::InvalidPriceOrder,
    {
        Default => "default",
        LowToHigh => "low-high",
        HighToLow => "high-low",
    }
);

impl PriceOrder {
    pub fn label(self) -> &'static str {
        match self {
            PriceOrder::Default => "Default",
            PriceOrder::LowToHigh => "Low to High(price)",
            PriceOrder::HighToLow => "High to Low(price)",
        }
    }
}

/// Rating ordering option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingOrder {
    #[default]
    Default,
    OneToFive,
    FiveToOne,
}

enum_display_fromstr!(
    RatingOrder,
    StorefrontError::InvalidRatingOrder,
    {
        Default => "default",
        OneToFive => "1-5",
        FiveToOne => "5-1",
    }
);

impl RatingOrder {
    pub fn label(self) -> &'static str {
        match self {
            RatingOrder::Default => "Default",
            RatingOrder::OneToFive => "1 to 5",
            RatingOrder::FiveToOne => "5 to 1",
        }
    }
}

/// Step to the next/previous entry of an option list, wrapping around
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else if idx == 0 {
        all.len() - 1
    } else {
        idx - 1
    };
    all[next]
}

/// User-adjustable display filters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub name_order: NameOrder,
    pub price_order: PriceOrder,
    pub rating_order: RatingOrder,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_name_order(mut self, order: NameOrder) -> Self {
        self.name_order = order;
        self
    }

    pub fn with_price_order(mut self, order: PriceOrder) -> Self {
        self.price_order = order;
        self
    }

    pub fn with_rating_order(mut self, order: RatingOrder) -> Self {
        self.rating_order = order;
        self
    }

    /// True when no search term or sort criterion is active
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.name_order == NameOrder::All
            && self.price_order == PriceOrder::Default
            && self.rating_order == RatingOrder::Default
    }
}

/// Owns the filter state; command/query separation over [`FilterState`]
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    filters: FilterState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.search_term = text.into();
    }

    pub fn set_name_order(&mut self, order: NameOrder) {
        self.filters.name_order = order;
    }

    pub fn set_price_order(&mut self, order: PriceOrder) {
        self.filters.price_order = order;
    }

    pub fn set_rating_order(&mut self, order: RatingOrder) {
        self.filters.rating_order = order;
    }

    pub fn cycle_name_order(&mut self, forward: bool) {
        self.filters.name_order = cycle(NameOrder::ALL, self.filters.name_order, forward);
    }

    pub fn cycle_price_order(&mut self, forward: bool) {
        self.filters.price_order = cycle(PriceOrder::ALL, self.filters.price_order, forward);
    }

    pub fn cycle_rating_order(&mut self, forward: bool) {
        self.filters.rating_order = cycle(RatingOrder::ALL, self.filters.rating_order, forward);
    }

    /// Derive the display list for `catalog` under the current filters
    pub fn display_list<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        derive_display_list(catalog, &self.filters)
    }
}
