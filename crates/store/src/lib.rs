//! `maison-store` — the catalog store collaborator.
//!
//! The rest of the system treats storage as an opaque read/write partner:
//! a product partition and a cart partition behind [`CatalogStore`]. The
//! in-memory implementation here is the single-user, process-local store
//! the storefront runs on; anything durable can implement the same trait.

pub mod memory;
pub mod store;
pub mod watch;

pub use memory::MemoryStore;
pub use store::{CatalogStore, StoreError};
pub use watch::{StoreEvent, StoreWatch, Subscription};
