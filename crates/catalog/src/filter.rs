//! Catalog filter engine.
//!
//! A pure function from (product list, criteria) to a filtered product list.
//! All predicates are independent and conjunctive, so application order does
//! not affect the result. The filter is stable: input order is preserved.

use serde::{Deserialize, Serialize};

use maison_core::ValueObject;

use crate::product::{Category, Product};

/// Price slider never shrinks below 100 currency units.
pub const PRICE_FLOOR_CENTS: u64 = 10_000;
/// Volume slider never shrinks below 100 ml.
pub const VOLUME_FLOOR_ML: u32 = 100;

/// An inclusive `[min, max]` range.
///
/// A degenerate range (`min > max`) is representable and simply matches
/// nothing — it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeBounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min > self.max
    }
}

impl<T: PartialOrd + Copy + core::fmt::Debug> ValueObject for RangeBounds<T> {}

/// An exact-match selection, or "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether a product attribute passes this selection.
    ///
    /// `All` passes everything, including products missing the attribute;
    /// `Only(tag)` requires the attribute to be present and equal.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(tag) => value == Some(tag),
        }
    }
}

/// Criteria for one filtering pass. A value object; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive price range, in cents.
    pub price: RangeBounds<u64>,
    /// Inclusive volume range, in millilitres. Products without a volume are
    /// treated as 0 ml for this test.
    pub volume: RangeBounds<u32>,
    pub fragrance: Selection<String>,
    pub category: Selection<Category>,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    /// Criteria that every product passes (the identity filter).
    pub fn match_all() -> Self {
        Self {
            price: RangeBounds::new(0, u64::MAX),
            volume: RangeBounds::new(0, u32::MAX),
            fragrance: Selection::All,
            category: Selection::All,
        }
    }

    /// Whether a single product passes all predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.price.contains(product.price_cents)
            && self.volume.contains(product.volume_ml.unwrap_or(0))
            && self.fragrance.admits(product.fragrance.as_ref())
            && self.category.admits(Some(&product.category))
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Apply `criteria` to `products`.
///
/// Pure and deterministic; total over its domain. Malformed criteria
/// (degenerate ranges, unknown tags) yield zero matches, never a failure.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Upper slider bounds derived from the current product list.
///
/// Recompute whenever the list changes: the maximum is the greater of the
/// largest value present and a floor of 100 units, so an empty or low-priced
/// catalog still yields a usable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub max_price_cents: u64,
    pub max_volume_ml: u32,
}

impl FilterBounds {
    pub fn from_products(products: &[Product]) -> Self {
        let max_price_cents = products
            .iter()
            .map(|p| p.price_cents)
            .max()
            .unwrap_or(0)
            .max(PRICE_FLOOR_CENTS);

        let max_volume_ml = products
            .iter()
            .map(|p| p.volume_ml.unwrap_or(0))
            .max()
            .unwrap_or(0)
            .max(VOLUME_FLOOR_ML);

        Self {
            max_price_cents,
            max_volume_ml,
        }
    }

    /// The widest criteria expressible on sliders with these bounds
    /// (what the "Clear" action resets to).
    pub fn clear_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price: RangeBounds::new(0, self.max_price_cents),
            volume: RangeBounds::new(0, self.max_volume_ml),
            fragrance: Selection::All,
            category: Selection::All,
        }
    }
}
