use std::sync::RwLock;

use maison_cart::CartLine;
use maison_catalog::Product;
use maison_core::ProductId;

use crate::store::{CatalogStore, StoreError};

/// In-memory catalog store.
///
/// Vectors rather than maps so product insertion order survives reads —
/// the filter engine's stable-order guarantee depends on it. The locks are
/// interior-only: the store assumes one logical writer, the `RwLock` just
/// lets a UI thread share the handle.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    cart: RwLock<Vec<CartLine>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with a product list (seed data, tests).
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            cart: RwLock::new(Vec::new()),
        }
    }
}

impl CatalogStore for MemoryStore {
    fn products(&self) -> Result<Vec<Product>, StoreError> {
        let guard = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let guard = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.iter().find(|p| p.id == id).cloned())
    }

    fn write_product(&self, product: Product) -> Result<(), StoreError> {
        let mut guard = self.products.write().map_err(|_| StoreError::Poisoned)?;
        match guard.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => guard.push(product),
        }
        Ok(())
    }

    fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut guard = self.products.write().map_err(|_| StoreError::Poisoned)?;
        let before = guard.len();
        guard.retain(|p| p.id != id);
        Ok(guard.len() != before)
    }

    fn cart(&self) -> Result<Vec<CartLine>, StoreError> {
        let guard = self.cart.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn write_cart(&self, lines: Vec<CartLine>) -> Result<(), StoreError> {
        let mut guard = self.cart.write().map_err(|_| StoreError::Poisoned)?;
        *guard = lines;
        Ok(())
    }
}
