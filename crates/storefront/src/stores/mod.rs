//! The state containers.
//!
//! One module per container, each following the same shape: a plain struct
//! over an injected [`StoragePort`](crate::storage::StoragePort), a
//! `hydrate` that loads the persisted blob once at startup, mutators that
//! write the full list through on every change, and `#[must_use]` accessors
//! for the derived values the UI renders.

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod products;
pub mod wishlist;

pub use addresses::{Address, AddressBook, AddressForm};
pub use auth::{AuthError, AuthStore, CredentialProvider, MockCredentialProvider, NewUser, SessionUser};
pub use cart::{CartLine, CartStore};
pub use products::{VendorProduct, VendorProductDraft, VendorProductStore};
pub use wishlist::{WishlistEntry, WishlistStore};
