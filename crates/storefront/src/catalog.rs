//! The product catalog port.
//!
//! The catalog is an external collaborator: the state layer never owns
//! product data, it only copies the fields it needs into cart lines and
//! wishlist entries at the moment of the add. A real deployment backs this
//! with a catalog service; tests use [`StaticCatalog`].

use kalartz_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// Category label, when the catalog assigns one.
    pub category: Option<String>,
    /// Product image reference.
    pub image: Option<String>,
}

/// Read access to the product catalog.
pub trait ProductCatalog: Send + Sync {
    /// Look up a single product by id.
    fn product(&self, id: &ProductId) -> Option<CatalogProduct>;

    /// All products the catalog currently offers.
    fn products(&self) -> Vec<CatalogProduct>;
}

/// A fixed, in-memory catalog.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    products: Vec<CatalogProduct>,
}

impl StaticCatalog {
    /// Build a catalog over a fixed product list.
    #[must_use]
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }
}

impl ProductCatalog for StaticCatalog {
    fn product(&self, id: &ProductId) -> Option<CatalogProduct> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    fn products(&self) -> Vec<CatalogProduct> {
        self.products.clone()
    }
}
