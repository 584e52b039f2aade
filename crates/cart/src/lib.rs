//! `maison-cart` — cart lines and subtotal/shipping arithmetic.
//!
//! Pure functions over a list of cart lines. Every mutator returns the new
//! line list; persisting it and notifying observers is the caller's job.

pub mod line;
pub mod summary;

pub use line::{add_line, remove_line, set_quantity, CartLine};
pub use summary::{summarize, CartTotals, ShippingPolicy};
