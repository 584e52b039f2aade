//! `maison-app` — application services for the storefront.
//!
//! Ties the pure cores (catalog filter, cart arithmetic, credential check)
//! to the catalog store collaborator. Each service method performs one
//! logical step: read the store, run the pure core, write back, publish a
//! change notification, and return the new state for the caller to render.

pub mod admin;
pub mod cart;
pub mod error;
pub mod shop;

pub use admin::{encode_image_data_url, AdminPanel};
pub use cart::{CartService, CartState};
pub use error::AppError;
pub use shop::{ShopPage, ShopView};
