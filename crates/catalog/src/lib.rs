//! `maison-catalog` — product records and the catalog filter engine.
//!
//! Pure domain logic: no storage, no rendering. The store collaborator owns
//! persistence; this crate owns what a product *is* and which products match
//! a set of filter criteria.

pub mod filter;
pub mod product;

pub use filter::{filter, FilterBounds, FilterCriteria, RangeBounds, Selection};
pub use product::{Category, Product, ProductDraft, FRAGRANCES};
