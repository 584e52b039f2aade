use std::sync::Arc;

use serde::Serialize;

use maison_catalog::{filter, FilterBounds, FilterCriteria, Product};
use maison_core::ProductId;
use maison_store::CatalogStore;

use crate::error::AppError;

/// Everything the shop page needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopPage {
    /// Products passing the current criteria, in catalog order.
    pub products: Vec<Product>,
    /// Slider bounds derived from the *full* list, not the filtered one.
    pub bounds: FilterBounds,
}

/// Read side of the storefront: browsing, filtering, featured picks.
#[derive(Clone)]
pub struct ShopView {
    store: Arc<dyn CatalogStore>,
}

impl ShopView {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Re-read the catalog and apply `criteria`.
    ///
    /// Bounds are recomputed on every call so they track catalog changes.
    pub fn browse(&self, criteria: &FilterCriteria) -> Result<ShopPage, AppError> {
        let all = self.store.products()?;
        let bounds = FilterBounds::from_products(&all);
        Ok(ShopPage {
            products: filter(&all, criteria),
            bounds,
        })
    }

    /// The home page's featured strip: first three featured products.
    pub fn featured(&self) -> Result<Vec<Product>, AppError> {
        let all = self.store.products()?;
        Ok(all.into_iter().filter(|p| p.featured).take(3).collect())
    }

    /// Product detail lookup. `Ok(None)` renders as the "not found" page.
    pub fn product_detail(&self, id: ProductId) -> Result<Option<Product>, AppError> {
        Ok(self.store.product(id)?)
    }
}
