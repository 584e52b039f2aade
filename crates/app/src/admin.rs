use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;

use maison_auth::{AdminCredentials, AdminSession, AuthError};
use maison_catalog::{Product, ProductDraft};
use maison_core::{DomainError, ProductId};
use maison_store::{CatalogStore, StoreEvent, StoreWatch};

use crate::error::AppError;

/// Encode an uploaded image file into a storable `data:` URL string.
pub fn encode_image_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Admin CRUD surface, gated behind a login.
///
/// Every catalog mutation requires a live [`AdminSession`]; the only way to
/// obtain one is [`AdminPanel::login`]. Mutators return the written product
/// so the caller can re-render without a second read.
pub struct AdminPanel {
    store: Arc<dyn CatalogStore>,
    watch: Arc<StoreWatch>,
    credentials: AdminCredentials,
    session: Option<AdminSession>,
}

impl AdminPanel {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        watch: Arc<StoreWatch>,
        credentials: AdminCredentials,
    ) -> Self {
        Self {
            store,
            watch,
            credentials,
            session: None,
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<&AdminSession, AppError> {
        let session = self.credentials.verify(username, password)?;
        tracing::info!(username = session.username(), "admin logged in");
        Ok(self.session.insert(session))
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(username = session.username(), "admin logged out");
        }
    }

    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    fn require_session(&self) -> Result<&AdminSession, AuthError> {
        self.session.as_ref().ok_or(AuthError::SessionRequired)
    }

    /// The admin table: the full catalog, unfiltered.
    pub fn products(&self) -> Result<Vec<Product>, AppError> {
        self.require_session()?;
        Ok(self.store.products()?)
    }

    /// Validate a draft and create a new product with a generated id.
    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, AppError> {
        self.require_session()?;
        let product = draft.commit(Utc::now())?;
        self.store.write_product(product.clone())?;
        self.watch.publish(StoreEvent::CatalogChanged);
        tracing::info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Validate a draft and replace an existing product in place.
    ///
    /// Id and creation timestamp are preserved; everything else is replaced.
    pub fn update_product(&self, id: ProductId, draft: ProductDraft) -> Result<Product, AppError> {
        self.require_session()?;
        let existing = self.store.product(id)?.ok_or(DomainError::NotFound)?;
        let product = draft.commit_update(&existing, Utc::now())?;
        self.store.write_product(product.clone())?;
        self.watch.publish(StoreEvent::CatalogChanged);
        tracing::info!(id = %product.id, name = %product.name, "product updated");
        Ok(product)
    }

    pub fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        self.require_session()?;
        if !self.store.delete_product(id)? {
            return Err(DomainError::NotFound.into());
        }
        self.watch.publish(StoreEvent::CatalogChanged);
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}
