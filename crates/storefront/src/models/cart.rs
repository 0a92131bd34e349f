//! Cart domain types.
//!
//! [`Cart`] holds the pure list semantics - merge by product id, the
//! quantity floor of 1, the recomputed total. Persistence write-through
//! lives in [`crate::services::cart::CartStore`], which owns the cart.

use serde::{Deserialize, Serialize};

use bestcakes_core::{Price, ProductId};

use super::product::Product;

/// One product-and-quantity pair within the cart.
///
/// Display strings are copied from the catalog at add time and are not
/// re-fetched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Price,
    /// Always at least 1; decrementing below 1 is a floor, not a removal.
    pub quantity: u32,
}

impl CartLineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Ordered sequence of cart line items (insertion order = display order).
///
/// Invariant: at most one line item per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Snapshot of the line items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `quantity` of `product`.
    ///
    /// An existing line for the same id has its quantity incremented;
    /// otherwise a new line is appended. A zero quantity is floored to 1.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(CartLineItem {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity,
        });
    }

    /// Remove the line item with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Apply `delta` to the quantity of the line item with `id`, flooring
    /// at 1. Absent ids are a no-op.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            let next = i64::from(item.quantity).saturating_add(delta).max(1);
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price × quantity` over all line items.
    ///
    /// Always recomputed, never cached.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }
}
