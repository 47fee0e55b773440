//! The address book container.
//!
//! A list of saved shipping addresses with one invariant: at most one
//! address is flagged as the default. Every path that can set the flag
//! demotes the rest in the same operation, so the invariant can never be
//! observed broken, before or after a reload.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kalartz_core::{AddressId, AddressKind};

use crate::error::{Result, StoreError};
use crate::storage::{self, StoragePort, keys};

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique id within the book.
    pub id: AddressId,
    /// Shopper-facing label, e.g. "Parents' place".
    pub label: String,
    /// Who the parcel is addressed to.
    pub recipient_name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// ZIP or postal code.
    pub zip: String,
    /// Country.
    pub country: String,
    /// Home or work.
    pub kind: AddressKind,
    /// Whether this address is pre-selected at checkout.
    pub is_default: bool,
    /// When the address was first saved.
    pub created_at: DateTime<Utc>,
}

/// Input for saving an address.
///
/// `id: None` creates a new address; `Some` edits the existing one.
#[derive(Debug, Clone)]
pub struct AddressForm {
    /// Target address, or `None` to create.
    pub id: Option<AddressId>,
    /// Shopper-facing label.
    pub label: String,
    /// Who the parcel is addressed to.
    pub recipient_name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// ZIP or postal code.
    pub zip: String,
    /// Country.
    pub country: String,
    /// Home or work.
    pub kind: AddressKind,
    /// Whether to make this the default address.
    pub is_default: bool,
}

/// The address book state container.
///
/// Persists under [`keys::ADDRESSES`].
pub struct AddressBook {
    storage: Arc<dyn StoragePort>,
    addresses: Vec<Address>,
}

impl AddressBook {
    /// Create an empty, not-yet-hydrated address book.
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            storage,
            addresses: Vec::new(),
        }
    }

    /// Load the persisted book, once, at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the persisted blob is corrupt.
    pub fn hydrate(&mut self) -> Result<()> {
        self.addresses = storage::load(self.storage.as_ref(), keys::ADDRESSES)?.unwrap_or_default();
        tracing::debug!(addresses = self.addresses.len(), "address book hydrated");
        Ok(())
    }

    /// Upsert an address.
    ///
    /// With `form.id` absent a new address is created under a generated id;
    /// with it present the named address is replaced (its creation time is
    /// kept). When the saved address is the default, every other address is
    /// demoted in the same operation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AddressNotFound`] if `form.id` names an address
    /// that is not in the book, or an error if the write-through fails.
    pub fn save(&mut self, form: AddressForm) -> Result<AddressId> {
        let AddressForm {
            id,
            label,
            recipient_name,
            street,
            city,
            state,
            zip,
            country,
            kind,
            is_default,
        } = form;

        let id = if let Some(id) = id {
            let slot = self
                .addresses
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| StoreError::AddressNotFound(id.clone()))?;
            let created_at = slot.created_at;
            *slot = Address {
                id: id.clone(),
                label,
                recipient_name,
                street,
                city,
                state,
                zip,
                country,
                kind,
                is_default,
                created_at,
            };
            id
        } else {
            let address = Address {
                id: AddressId::generate(),
                label,
                recipient_name,
                street,
                city,
                state,
                zip,
                country,
                kind,
                is_default,
                created_at: Utc::now(),
            };
            let id = address.id.clone();
            self.addresses.push(address);
            id
        };

        if is_default {
            for address in &mut self.addresses {
                address.is_default = address.id == id;
            }
        }

        self.persist()?;
        Ok(id)
    }

    /// Remove an address by id.
    ///
    /// Returns whether anything was removed. Deleting the default does NOT
    /// promote another address; checkout falls back to explicit selection
    /// until the shopper picks a new default.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn delete(&mut self, id: &AddressId) -> Result<bool> {
        let before = self.addresses.len();
        self.addresses.retain(|a| &a.id != id);
        if self.addresses.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Make the named address the single default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AddressNotFound`] if the id is not in the
    /// book, or an error if the write-through fails.
    pub fn set_default(&mut self, id: &AddressId) -> Result<()> {
        if !self.addresses.iter().any(|a| &a.id == id) {
            return Err(StoreError::AddressNotFound(id.clone()));
        }
        for address in &mut self.addresses {
            address.is_default = &address.id == id;
        }
        self.persist()
    }

    /// The saved addresses, in insertion order.
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The default address, if one is flagged.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
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
        storage::save(self.storage.as_ref(), keys::ADDRESSES, &self.addresses)
    }
}
