use thiserror::Error;

use maison_cart::CartLine;
use maison_catalog::Product;
use maison_core::ProductId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Opaque storage collaborator: a product partition and a cart partition.
///
/// The store owns both partitions exclusively — no other component persists
/// a copy. Implementations must preserve product insertion order, because
/// list order is the order the filter engine preserves.
///
/// At most one logical writer at a time is assumed; implementations need not
/// provide multi-writer transaction discipline.
pub trait CatalogStore: Send + Sync {
    /// Full product list, in insertion order.
    fn products(&self) -> Result<Vec<Product>, StoreError>;

    /// Lookup by id. `Ok(None)` is the "not found" view state, not a fault.
    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert or replace a product, keyed by its id.
    ///
    /// Replacing keeps the product's position in the list.
    fn write_product(&self, product: Product) -> Result<(), StoreError>;

    /// Delete by id; returns whether anything was removed.
    fn delete_product(&self, id: ProductId) -> Result<bool, StoreError>;

    /// The cart partition.
    fn cart(&self) -> Result<Vec<CartLine>, StoreError>;

    /// Replace the cart partition wholesale.
    fn write_cart(&self, lines: Vec<CartLine>) -> Result<(), StoreError>;
}
