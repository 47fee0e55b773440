//! The wishlist container.
//!
//! A saved-for-later set of product references. Unlike the cart, adding a
//! product that is already present changes nothing - the shopper is told it
//! is already saved instead of anything being counted twice.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use kalartz_core::{Price, ProductId};

use crate::catalog::CatalogProduct;
use crate::error::Result;
use crate::notify::{Notifier, Toast};
use crate::storage::{self, StoragePort, keys};

/// A saved product reference (no quantity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Catalog id of the product.
    pub product_id: ProductId,
    /// Product name, copied from the catalog at add time.
    pub name: String,
    /// Price at the moment the product was saved.
    pub price: Price,
    /// Product image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category label, when the catalog had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&CatalogProduct> for WishlistEntry {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// The wishlist state container.
///
/// Persists under [`keys::WISHLIST`] and announces every outcome to the
/// shopper through the injected [`Notifier`].
pub struct WishlistStore {
    storage: Arc<dyn StoragePort>,
    notifier: Arc<dyn Notifier>,
    entries: Vec<WishlistEntry>,
}

impl WishlistStore {
    /// Create an empty, not-yet-hydrated wishlist.
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            storage,
            notifier,
            entries: Vec::new(),
        }
    }

    /// Load the persisted wishlist, once, at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the persisted blob is corrupt.
    pub fn hydrate(&mut self) -> Result<()> {
        self.entries = storage::load(self.storage.as_ref(), keys::WISHLIST)?.unwrap_or_default();
        tracing::debug!(entries = self.entries.len(), "wishlist hydrated");
        Ok(())
    }

    /// Save a product. Idempotent: a product already on the list stays a
    /// single entry and only a reminder toast is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_item(&mut self, product: &CatalogProduct) -> Result<()> {
        if self.entries.iter().any(|e| e.product_id == product.id) {
            self.notifier.notify(Toast::new(
                "Already in Wishlist",
                format!("{} is already in your wishlist.", product.name),
            ));
            return Ok(());
        }

        self.entries.push(WishlistEntry::from(product));
        self.notifier.notify(Toast::new(
            "Added to Wishlist!",
            format!("{} has been added to your wishlist.", product.name),
        ));
        self.persist()
    }

    /// Remove a saved product. Removing an absent id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<()> {
        let Some(pos) = self.entries.iter().position(|e| &e.product_id == product_id) else {
            return Ok(());
        };

        let entry = self.entries.remove(pos);
        self.notifier.notify(Toast::new(
            "Removed from Wishlist",
            format!("{} has been removed from your wishlist.", entry.name),
        ));
        self.persist()
    }

    /// Whether a product is currently saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.product_id == product_id)
    }

    /// Drop every saved product.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.notifier.notify(Toast::new(
            "Wishlist Cleared",
            "All items have been removed from your wishlist.",
        ));
        self.persist()
    }

    /// The saved entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
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
        storage::save(self.storage.as_ref(), keys::WISHLIST, &self.entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use kalartz_core::CurrencyCode;

    use crate::storage::MemoryStorage;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: Mutex<Vec<Toast>>,
    }

    impl RecordingNotifier {
        fn titles(&self) -> Vec<String> {
            self.toasts
                .lock()
                .unwrap()
                .iter()
                .map(|t| t.title.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.lock().unwrap().push(toast);
        }
    }

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(4999, CurrencyCode::USD),
            category: None,
            image: Some("image.jpg".to_owned()),
        }
    }

    fn wishlist() -> (WishlistStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = WishlistStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );
        (store, notifier)
    }

    #[test]
    fn test_double_add_keeps_single_entry() {
        let (mut wishlist, notifier) = wishlist();
        let w1 = product("w1");

        wishlist.add_item(&w1).unwrap();
        wishlist.add_item(&w1).unwrap();

        assert_eq!(wishlist.entries().len(), 1);
        assert_eq!(
            notifier.titles(),
            vec!["Added to Wishlist!", "Already in Wishlist"]
        );
    }

    #[test]
    fn test_contains() {
        let (mut wishlist, _) = wishlist();
        wishlist.add_item(&product("w1")).unwrap();

        assert!(wishlist.contains(&ProductId::new("w1")));
        assert!(!wishlist.contains(&ProductId::new("w2")));
    }

    #[test]
    fn test_remove_toasts_only_when_present() {
        let (mut wishlist, notifier) = wishlist();
        wishlist.add_item(&product("w1")).unwrap();

        wishlist.remove_item(&ProductId::new("ghost")).unwrap();
        wishlist.remove_item(&ProductId::new("w1")).unwrap();

        assert!(wishlist.entries().is_empty());
        assert_eq!(
            notifier.titles(),
            vec!["Added to Wishlist!", "Removed from Wishlist"]
        );
    }

    #[test]
    fn test_clear() {
        let (mut wishlist, notifier) = wishlist();
        wishlist.add_item(&product("w1")).unwrap();
        wishlist.add_item(&product("w2")).unwrap();
        wishlist.clear().unwrap();

        assert!(wishlist.entries().is_empty());
        assert_eq!(notifier.titles().last().map(String::as_str), Some("Wishlist Cleared"));
    }

    #[test]
    fn test_hydrate_restores_entries() {
        let storage: Arc<dyn StoragePort> = Arc::new(MemoryStorage::new());
        let notifier: Arc<dyn Notifier> = Arc::new(RecordingNotifier::default());
        {
            let mut wishlist =
                WishlistStore::new(Arc::clone(&storage), Arc::clone(&notifier));
            wishlist.add_item(&product("w1")).unwrap();
        }

        let mut reloaded = WishlistStore::new(storage, notifier);
        reloaded.hydrate().unwrap();
        assert!(reloaded.contains(&ProductId::new("w1")));
    }
}
