use std::sync::Arc;

use serde::Serialize;

use maison_cart::{add_line, remove_line, set_quantity, summarize, CartLine, CartTotals, ShippingPolicy};
use maison_core::{DomainError, ProductId};
use maison_store::{CatalogStore, StoreEvent, StoreWatch};

use crate::error::AppError;

/// Cart state after a mutation: the new lines and their totals.
///
/// Callers re-render from this return value; the published [`StoreEvent`] is
/// only for *other* views that happen to be watching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// Cart operations over the stored cart partition.
#[derive(Clone)]
pub struct CartService {
    store: Arc<dyn CatalogStore>,
    watch: Arc<StoreWatch>,
    policy: ShippingPolicy,
}

impl CartService {
    pub fn new(store: Arc<dyn CatalogStore>, watch: Arc<StoreWatch>) -> Self {
        Self {
            store,
            watch,
            policy: ShippingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ShippingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Current cart without mutating anything. Totals are recomputed on
    /// every read.
    pub fn state(&self) -> Result<CartState, AppError> {
        let lines = self.store.cart()?;
        Ok(self.into_state(lines))
    }

    /// Add a product to the cart; `qty` defaults to 1 when unspecified.
    ///
    /// The product is snapshotted at this moment; an already-present product
    /// has its quantity incremented instead of gaining a second line.
    pub fn add_to_cart(&self, id: ProductId, qty: Option<u32>) -> Result<CartState, AppError> {
        let product = self.store.product(id)?.ok_or(DomainError::NotFound)?;
        let lines = add_line(self.store.cart()?, &product, qty.unwrap_or(1));
        self.commit(lines)
    }

    /// Set a line's quantity; values below 1 clamp to 1 (removal is explicit).
    pub fn update_quantity(&self, id: ProductId, new_qty: u32) -> Result<CartState, AppError> {
        let lines = set_quantity(self.store.cart()?, id, new_qty);
        self.commit(lines)
    }

    /// Remove a line regardless of its quantity.
    pub fn remove(&self, id: ProductId) -> Result<CartState, AppError> {
        let lines = remove_line(self.store.cart()?, id);
        self.commit(lines)
    }

    fn commit(&self, lines: Vec<CartLine>) -> Result<CartState, AppError> {
        self.store.write_cart(lines.clone())?;
        self.watch.publish(StoreEvent::CartChanged);
        let state = self.into_state(lines);
        tracing::debug!(
            lines = state.lines.len(),
            subtotal_cents = state.totals.subtotal_cents,
            "cart updated"
        );
        Ok(state)
    }

    fn into_state(&self, lines: Vec<CartLine>) -> CartState {
        let totals = summarize(&lines, &self.policy);
        CartState { lines, totals }
    }
}
