//! The shopping cart container.
//!
//! Holds the ordered list of line items for the active session, keyed by
//! product id. Adding an id that is already in the cart increments that
//! line's quantity; contrast with the wishlist, where a repeated add is a
//! no-op.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kalartz_core::{CurrencyCode, Price, ProductId};

use crate::catalog::CatalogProduct;
use crate::error::Result;
use crate::storage::{self, StoragePort, keys};

/// One (product, quantity) pair in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id of the product.
    pub product_id: ProductId,
    /// Product name, copied from the catalog at add time.
    pub name: String,
    /// Unit price, copied from the catalog at add time.
    pub unit_price: Price,
    /// Units of this product in the cart.
    pub quantity: u32,
    /// Category label, when the catalog had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Product image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// `unit_price x quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The cart state container.
///
/// Every mutation that changes the list writes it through to storage under
/// [`keys::CART`] before returning; calls that leave the list untouched
/// (removing an absent id, for instance) skip the redundant write.
pub struct CartStore {
    storage: Arc<dyn StoragePort>,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty, not-yet-hydrated cart over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            storage,
            lines: Vec::new(),
        }
    }

    /// Load the persisted cart, once, at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the persisted blob is corrupt.
    pub fn hydrate(&mut self) -> Result<()> {
        self.lines = storage::load(self.storage.as_ref(), keys::CART)?.unwrap_or_default();
        tracing::debug!(lines = self.lines.len(), "cart hydrated");
        Ok(())
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart its line quantity grows by the
    /// given amount; otherwise a new line is appended. The store imposes no
    /// upper bound on quantity - that policy belongs to the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_item(&mut self, product: &CatalogProduct, quantity: u32) -> Result<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
                category: product.category.clone(),
                image: product.image.clone(),
            });
        }
        self.persist()
    }

    /// Set the quantity of an existing line to exactly `quantity`.
    ///
    /// The line is kept even at quantity zero: whether a zeroed line should
    /// disappear is the caller's policy, expressed by calling
    /// [`remove_item`](Self::remove_item). Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<()> {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return Ok(());
        };
        line.quantity = quantity;
        self.persist()
    }

    /// Remove a line by product id. Removing an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<()> {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Empty the cart unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.persist()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `unit_price x quantity` across all lines.
    ///
    /// All catalog prices share one currency; an empty cart totals zero in
    /// the default currency.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let Some(first) = self.lines.first() else {
            return Price::zero(CurrencyCode::default());
        };
        let amount: Decimal = self.lines.iter().map(|l| l.line_total().amount).sum();
        Price::new(amount, first.unit_price.currency_code)
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
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
        storage::save(self.storage.as_ref(), keys::CART, &self.lines)
    }
}
