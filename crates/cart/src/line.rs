use serde::{Deserialize, Serialize};

use maison_catalog::Product;
use maison_core::{Entity, ProductId};

/// One cart line: a product snapshot plus a mutable quantity.
///
/// Identity is the referenced product id; a cart holds at most one line per
/// product. The snapshot captures name/price/image/category at add time, so
/// later catalog edits do not retroactively change a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price in cents, snapshotted at add time.
    pub price_cents: u64,
    pub image: Option<String>,
    pub category: String,
    /// Always >= 1; a line that should disappear is removed, not zeroed.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a fresh line.
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            category: product.category.to_string(),
            quantity: quantity.max(1),
        }
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Merge an add-to-cart request into the line list.
///
/// Present product id: quantity += qty. Absent: a new line is appended. A
/// zero qty is lifted to 1 — this operation never produces quantity < 1.
pub fn add_line(mut lines: Vec<CartLine>, product: &Product, qty: u32) -> Vec<CartLine> {
    let qty = qty.max(1);
    match lines.iter_mut().find(|l| l.product_id == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(qty),
        None => lines.push(CartLine::snapshot(product, qty)),
    }
    lines
}

/// Set a line's quantity directly.
///
/// A new_qty of 0 (the decrement-below-one case) clamps to 1; dropping a
/// line is [`remove_line`]'s job, never an implicit side effect of a
/// quantity update. Unknown product ids are a no-op.
pub fn set_quantity(mut lines: Vec<CartLine>, product_id: ProductId, new_qty: u32) -> Vec<CartLine> {
    if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
        line.quantity = new_qty.max(1);
    }
    lines
}

/// Delete a line unconditionally, whatever its quantity. No-op if absent.
pub fn remove_line(mut lines: Vec<CartLine>, product_id: ProductId) -> Vec<CartLine> {
    lines.retain(|l| l.product_id != product_id);
    lines
}
