//! The application root.
//!
//! [`Storefront`] owns every state container, wired over one shared storage
//! backend. The embedding shell builds it once at startup (`init`), hands
//! out store references to its views for the life of the session, and tears
//! it down on the way out (`dispose`).

use std::sync::Arc;

use crate::catalog::ProductCatalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::notify::Notifier;
use crate::storage::{FileStorage, StoragePort};
use crate::stores::{
    AddressBook, AuthStore, CartStore, MockCredentialProvider, VendorProductStore, WishlistStore,
};

/// The fully wired, hydrated state layer.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Arc<dyn ProductCatalog>,
    cart: CartStore,
    wishlist: WishlistStore,
    auth: AuthStore<MockCredentialProvider>,
    addresses: AddressBook,
    vendor_products: VendorProductStore,
}

impl Storefront {
    /// Build and hydrate the state layer over file-backed storage at the
    /// configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be opened, storage
    /// fails, or a persisted blob is corrupt.
    pub fn init(
        config: StorefrontConfig,
        catalog: Arc<dyn ProductCatalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let storage: Arc<dyn StoragePort> = Arc::new(FileStorage::open(&config.data_dir)?);
        Self::init_with_storage(config, storage, catalog, notifier)
    }

    /// Build and hydrate the state layer over an explicit storage backend.
    ///
    /// Tests use this with an in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or a persisted blob is corrupt.
    pub fn init_with_storage(
        config: StorefrontConfig,
        storage: Arc<dyn StoragePort>,
        catalog: Arc<dyn ProductCatalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let mut cart = CartStore::new(Arc::clone(&storage));
        let mut wishlist = WishlistStore::new(Arc::clone(&storage), notifier);
        let mut auth = AuthStore::new(Arc::clone(&storage), MockCredentialProvider);
        let mut addresses = AddressBook::new(Arc::clone(&storage));
        let mut vendor_products = VendorProductStore::new(storage);

        cart.hydrate()?;
        wishlist.hydrate()?;
        auth.hydrate()?;
        addresses.hydrate()?;
        vendor_products.hydrate()?;
        tracing::info!(data_dir = %config.data_dir.display(), "storefront state hydrated");

        Ok(Self {
            config,
            catalog,
            cart,
            wishlist,
            auth,
            addresses,
            vendor_products,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The external product catalog.
    #[must_use]
    pub fn catalog(&self) -> &dyn ProductCatalog {
        self.catalog.as_ref()
    }

    /// The shopping cart.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The shopping cart, for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The wishlist.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// The wishlist, for mutation.
    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// The session container.
    #[must_use]
    pub fn auth(&self) -> &AuthStore<MockCredentialProvider> {
        &self.auth
    }

    /// The session container, for mutation.
    pub fn auth_mut(&mut self) -> &mut AuthStore<MockCredentialProvider> {
        &mut self.auth
    }

    /// The address book.
    #[must_use]
    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    /// The address book, for mutation.
    pub fn addresses_mut(&mut self) -> &mut AddressBook {
        &mut self.addresses
    }

    /// The vendor's local product list.
    #[must_use]
    pub fn vendor_products(&self) -> &VendorProductStore {
        &self.vendor_products
    }

    /// The vendor's local product list, for mutation.
    pub fn vendor_products_mut(&mut self) -> &mut VendorProductStore {
        &mut self.vendor_products
    }

    /// Tear down the state layer, flushing every container.
    ///
    /// Containers write through on every change, so this is a defensive
    /// final write, not the only persistence point.
    ///
    /// # Errors
    ///
    /// Returns the first flush failure encountered.
    pub fn dispose(self) -> Result<()> {
        self.cart.flush()?;
        self.wishlist.flush()?;
        self.auth.flush()?;
        self.addresses.flush()?;
        self.vendor_products.flush()?;
        tracing::info!("storefront state disposed");
        Ok(())
    }
}
