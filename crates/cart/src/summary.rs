use serde::{Deserialize, Serialize};

use maison_core::ValueObject;

use crate::line::CartLine;

/// Shipping configuration.
///
/// Shipping is free once the subtotal strictly exceeds the threshold;
/// otherwise a flat fee applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub free_shipping_threshold_cents: u64,
    pub flat_fee_cents: u64,
}

impl Default for ShippingPolicy {
    /// Free shipping above 50 currency units, flat fee 5.99.
    fn default() -> Self {
        Self {
            free_shipping_threshold_cents: 5_000,
            flat_fee_cents: 599,
        }
    }
}

impl ValueObject for ShippingPolicy {}

/// Aggregate view of a cart, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal_cents: u64,
    pub shipping_cents: u64,
    pub total_cents: u64,
}

impl ValueObject for CartTotals {}

impl CartTotals {
    pub fn shipping_is_free(&self) -> bool {
        self.shipping_cents == 0
    }

    /// How much more to spend before shipping becomes free ("Add $X more for
    /// free shipping"). Zero once the cart already ships free.
    pub fn remaining_for_free_shipping(&self, policy: &ShippingPolicy) -> u64 {
        if self.subtotal_cents > policy.free_shipping_threshold_cents {
            0
        } else {
            policy.free_shipping_threshold_cents - self.subtotal_cents
        }
    }
}

/// Compute subtotal/shipping/total for the given lines.
///
/// Pure and deterministic; no caching beyond the caller's own re-render
/// trigger.
pub fn summarize(lines: &[CartLine], policy: &ShippingPolicy) -> CartTotals {
    let subtotal_cents: u64 = lines
        .iter()
        .map(|l| l.price_cents.saturating_mul(u64::from(l.quantity)))
        .sum();

    let shipping_cents = if subtotal_cents > policy.free_shipping_threshold_cents {
        0
    } else {
        policy.flat_fee_cents
    };

    CartTotals {
        subtotal_cents,
        shipping_cents,
        total_cents: subtotal_cents + shipping_cents,
    }
}
