//! Demo wiring: seed a small catalog, browse it, run a cart flow.

use std::sync::Arc;

use maison_app::{AdminPanel, CartService, ShopView};
use maison_auth::AdminCredentials;
use maison_catalog::{Category, FilterCriteria, ProductDraft, RangeBounds, Selection};
use maison_store::{CatalogStore, MemoryStore, StoreWatch};

fn main() -> anyhow::Result<()> {
    maison_observability::init();

    let store: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
    let watch = Arc::new(StoreWatch::new());

    let mut admin = AdminPanel::new(
        Arc::clone(&store),
        Arc::clone(&watch),
        AdminCredentials::from_env(),
    );
    let admin_user = std::env::var("MAISON_ADMIN_USER").unwrap_or_else(|_| "admin".into());
    let admin_pass = std::env::var("MAISON_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());
    admin.login(&admin_user, &admin_pass)?;

    let parade = admin.create_product(
        ProductDraft::new()
            .name("Parade Eau de Parfum")
            .category(Category::Fragrance)
            .description("Bright citrus over white musk")
            .price_cents(8_900)
            .volume_ml(50)
            .fragrance("PARADE")
            .featured(true)
            .stock(24),
    )?;
    admin.create_product(
        ProductDraft::new()
            .name("Night Repair Cream")
            .category(Category::Skincare)
            .description("Overnight barrier cream")
            .price_cents(3_400)
            .stock(60),
    )?;
    admin.create_product(
        ProductDraft::new()
            .name("Black Tie Extrait")
            .category(Category::Fragrance)
            .description("Smoked oud for evenings")
            .price_cents(15_500)
            .volume_ml(30)
            .fragrance("BLACK TIE")
            .featured(true)
            .stock(8),
    )?;

    let shop = ShopView::new(Arc::clone(&store));
    let criteria = FilterCriteria {
        price: RangeBounds::new(0, 10_000),
        fragrance: Selection::All,
        ..FilterCriteria::match_all()
    };
    let page = shop.browse(&criteria)?;
    tracing::info!(
        matches = page.products.len(),
        max_price_cents = page.bounds.max_price_cents,
        "browsed catalog under 100.00"
    );

    let cart = CartService::new(Arc::clone(&store), Arc::clone(&watch));
    let sub = watch.subscribe();
    cart.add_to_cart(parade.id, None)?;
    let state = cart.add_to_cart(parade.id, Some(1))?;
    tracing::info!(
        quantity = state.lines[0].quantity,
        subtotal_cents = state.totals.subtotal_cents,
        shipping_cents = state.totals.shipping_cents,
        total_cents = state.totals.total_cents,
        notifications = sub.drain().len(),
        "cart flow complete"
    );

    Ok(())
}
