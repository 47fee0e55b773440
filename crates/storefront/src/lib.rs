//! Kalartz Storefront - client-side state layer.
//!
//! This crate holds the state containers behind the Kalartz storefront UI:
//! the cart, the wishlist, the session user, the address book, and the
//! vendor's local product list. Each container hydrates once from a
//! key-value [`storage`] port at startup, writes through on every mutation,
//! and exposes the derived values the UI renders (totals, membership checks,
//! the default address).
//!
//! # Architecture
//!
//! - Containers are plain structs mutated through `&mut self` from UI event
//!   handlers; there is no interior mutability and no locking.
//! - Everything that crosses the process boundary sits behind a port:
//!   persistence ([`storage::StoragePort`]), the product catalog
//!   ([`catalog::ProductCatalog`]), toast presentation ([`notify::Notifier`]),
//!   and credential verification ([`stores::auth::CredentialProvider`]).
//! - [`state::Storefront`] is the application root: it builds the containers
//!   over one shared storage backend, hydrates them in `init`, and tears them
//!   down in `dispose`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod storage;
pub mod stores;
pub mod telemetry;

pub use error::{Result, StoreError};
pub use state::Storefront;
