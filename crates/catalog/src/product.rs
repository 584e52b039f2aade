use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maison_core::{DomainError, DomainResult, Entity, ProductId};

/// Fixed fragrance vocabulary the storefront sells.
///
/// Filter selections and draft validation check membership against this list;
/// an unknown tag is a validation error on write and simply matches nothing
/// on read.
pub const FRAGRANCES: &[&str] = &[
    "PARADE",
    "SAINT-GERMAINS-DES-PRÉS",
    "COLOGNE FRANÇAISE",
    "DANS PARIS",
    "LA PEAU NUE",
    "RIMBAUD",
    "BOIS DORMANT",
    "EAU DE CALIFORNIE",
    "REPTILE",
    "BLACK TIE",
    "NIGHTCLUBBING",
];

/// Product category (fixed vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skincare,
    Makeup,
    Haircare,
    Fragrance,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Skincare => "Skincare",
            Category::Makeup => "Makeup",
            Category::Haircare => "Haircare",
            Category::Fragrance => "Fragrance",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
///
/// Owned exclusively by the catalog store; everything else works on copies.
/// The id is immutable once created — edits replace every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Price in the smallest currency unit (cents).
    pub price_cents: u64,
    /// Encoded image as a storable string (`data:` URL), if one was uploaded.
    pub image: Option<String>,
    /// Display rating in [0, 5]; absent ratings are simply not displayed.
    pub rating: Option<f32>,
    pub featured: bool,
    pub stock: u32,
    /// Bottle volume in millilitres; absent for non-fragrance products.
    pub volume_ml: Option<u32>,
    /// Scent tag from [`FRAGRANCES`].
    pub fragrance: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product being assembled by the admin form, field by field.
///
/// Nothing is checked while fields are set; validation happens once, at
/// [`ProductDraft::commit`] / [`ProductDraft::commit_update`] time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub price_cents: Option<u64>,
    pub image: Option<String>,
    pub rating: Option<f32>,
    pub featured: bool,
    pub stock: Option<u32>,
    pub volume_ml: Option<u32>,
    pub fragrance: Option<String>,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price_cents(mut self, price_cents: u64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn volume_ml(mut self, volume_ml: u32) -> Self {
        self.volume_ml = Some(volume_ml);
        self
    }

    pub fn fragrance(mut self, fragrance: impl Into<String>) -> Self {
        self.fragrance = Some(fragrance.into());
        self
    }

    /// Validate the draft and create a new product with a fresh id.
    pub fn commit(self, now: DateTime<Utc>) -> DomainResult<Product> {
        self.build(ProductId::new(), now, now)
    }

    /// Validate the draft and replace an existing product in place.
    ///
    /// Every field is replaceable except the id; `created_at` carries over.
    pub fn commit_update(self, existing: &Product, now: DateTime<Utc>) -> DomainResult<Product> {
        self.build(existing.id, existing.created_at, now)
    }

    fn build(
        self,
        id: ProductId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Product> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::validation("name cannot be empty"))?
            .to_string();

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| DomainError::validation("description cannot be empty"))?
            .to_string();

        let category = self
            .category
            .ok_or_else(|| DomainError::validation("category is required"))?;

        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(DomainError::validation(format!(
                    "rating must be within [0, 5], got {rating}"
                )));
            }
        }

        if let Some(ref tag) = self.fragrance {
            if !FRAGRANCES.contains(&tag.as_str()) {
                return Err(DomainError::validation(format!(
                    "unknown fragrance tag: {tag}"
                )));
            }
        }

        Ok(Product {
            id,
            name,
            category,
            description,
            price_cents: self.price_cents.unwrap_or(0),
            image: self.image,
            rating: self.rating,
            featured: self.featured,
            stock: self.stock.unwrap_or(0),
            volume_ml: self.volume_ml,
            fragrance: self.fragrance,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn valid_draft() -> ProductDraft {
        ProductDraft::new()
            .name("Velvet Orchid")
            .category(Category::Fragrance)
            .description("A warm floral eau de parfum")
            .price_cents(4500)
            .volume_ml(50)
            .fragrance("PARADE")
    }

    #[test]
    fn commit_creates_product_with_fresh_id() {
        let a = valid_draft().commit(test_time()).unwrap();
        let b = valid_draft().commit(test_time()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Velvet Orchid");
        assert_eq!(a.price_cents, 4500);
        assert_eq!(a.volume_ml, Some(50));
    }

    #[test]
    fn commit_rejects_empty_name() {
        let err = valid_draft().name("   ").commit(test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn commit_rejects_missing_category() {
        let mut draft = valid_draft();
        draft.category = None;
        let err = draft.commit(test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn commit_rejects_out_of_range_rating() {
        let err = valid_draft().rating(5.5).commit(test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn commit_rejects_unknown_fragrance_tag() {
        let err = valid_draft()
            .fragrance("SANDALWOOD SUPREME")
            .commit(test_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn commit_defaults_optional_numerics() {
        let draft = ProductDraft::new()
            .name("Simple Soap")
            .category(Category::Skincare)
            .description("Unscented bar");
        let product = draft.commit(test_time()).unwrap();
        assert_eq!(product.price_cents, 0);
        assert_eq!(product.stock, 0);
        assert!(!product.featured);
        assert!(product.rating.is_none());
        assert!(product.volume_ml.is_none());
    }

    #[test]
    fn commit_update_preserves_id_and_created_at() {
        let created = test_time();
        let original = valid_draft().commit(created).unwrap();

        let updated = valid_draft()
            .name("Velvet Orchid Intense")
            .price_cents(5200)
            .commit_update(&original, test_time())
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Velvet Orchid Intense");
        assert_eq!(updated.price_cents, 5200);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[test]
    fn name_and_description_are_trimmed() {
        let product = valid_draft()
            .name("  Rose Cream  ")
            .description("  rich night cream  ")
            .commit(test_time())
            .unwrap();
        assert_eq!(product.name, "Rose Cream");
        assert_eq!(product.description, "rich night cream");
    }
}
