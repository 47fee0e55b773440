//! The vendor's local product list.
//!
//! Products a vendor adds through the storefront are kept client-side,
//! append-only, under their own storage key. Editing and removal surface
//! elsewhere in the vendor UI once a real catalog backend exists.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kalartz_core::{Price, ProductId};

use crate::error::Result;
use crate::storage::{self, StoragePort, keys};

/// A product listed by the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProduct {
    /// Locally minted id, prefixed `prod_`.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Vendor's own SKU, if they track one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Uploaded image references.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// When the product was listed.
    pub created_at: DateTime<Utc>,
}

/// Input for listing a new product.
#[derive(Debug, Clone)]
pub struct VendorProductDraft {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category label.
    pub category: String,
    /// Units in stock.
    pub stock_quantity: u32,
    /// Vendor's own SKU, if they track one.
    pub sku: Option<String>,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Uploaded image references.
    pub image_urls: Vec<String>,
}

/// The vendor product state container.
///
/// Persists under [`keys::VENDOR_PRODUCTS`].
pub struct VendorProductStore {
    storage: Arc<dyn StoragePort>,
    products: Vec<VendorProduct>,
}

impl VendorProductStore {
    /// Create an empty, not-yet-hydrated product list.
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            storage,
            products: Vec::new(),
        }
    }

    /// Load the persisted list, once, at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the persisted blob is corrupt.
    pub fn hydrate(&mut self) -> Result<()> {
        self.products =
            storage::load(self.storage.as_ref(), keys::VENDOR_PRODUCTS)?.unwrap_or_default();
        tracing::debug!(products = self.products.len(), "vendor products hydrated");
        Ok(())
    }

    /// List a new product, returning its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add(&mut self, draft: VendorProductDraft) -> Result<ProductId> {
        let id = ProductId::new(format!("prod_{}", uuid::Uuid::new_v4().simple()));
        self.products.push(VendorProduct {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            stock_quantity: draft.stock_quantity,
            sku: draft.sku,
            tags: draft.tags,
            image_urls: draft.image_urls,
            created_at: Utc::now(),
        });
        self.persist()?;
        Ok(id)
    }

    /// The listed products, oldest first.
    #[must_use]
    pub fn products(&self) -> &[VendorProduct] {
        &self.products
    }

    /// Rewrite the current state to storage (teardown flush).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn flush(&self) -> Result<()> {
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        storage::save(self.storage.as_ref(), keys::VENDOR_PRODUCTS, &self.products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kalartz_core::CurrencyCode;

    use crate::storage::MemoryStorage;

    use super::*;

    fn draft(name: &str) -> VendorProductDraft {
        VendorProductDraft {
            name: name.to_owned(),
            description: "Hand-made, small batch.".to_owned(),
            price: Price::from_cents(1850, CurrencyCode::USD),
            category: "Home".to_owned(),
            stock_quantity: 12,
            sku: Some("KLZ-001".to_owned()),
            tags: vec!["handmade".to_owned()],
            image_urls: Vec::new(),
        }
    }

    #[test]
    fn test_add_generates_prefixed_id() {
        let mut store = VendorProductStore::new(Arc::new(MemoryStorage::new()));
        let id = store.add(draft("Ceramic Mug")).unwrap();

        assert!(id.as_str().starts_with("prod_"));
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = VendorProductStore::new(Arc::new(MemoryStorage::new()));
        store.add(draft("First")).unwrap();
        store.add(draft("Second")).unwrap();

        let names: Vec<&str> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_hydrate_restores_products() {
        let storage: Arc<dyn StoragePort> = Arc::new(MemoryStorage::new());
        {
            let mut store = VendorProductStore::new(Arc::clone(&storage));
            store.add(draft("Ceramic Mug")).unwrap();
        }

        let mut reloaded = VendorProductStore::new(storage);
        reloaded.hydrate().unwrap();
        assert_eq!(reloaded.products().len(), 1);
        assert_eq!(
            reloaded.products().first().unwrap().name,
            "Ceramic Mug"
        );
    }
}
