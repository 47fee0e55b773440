//! Kalartz Core - Shared types library.
//!
//! This crate provides the common types used across all Kalartz components:
//! - `storefront` - Client-side storefront state layer
//! - `integration-tests` - Cross-store test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
