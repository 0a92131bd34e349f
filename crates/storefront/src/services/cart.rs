//! Cart store.
//!
//! Single source of truth for the shopping cart, synchronized with durable
//! storage under the `"cart"` record. The cart is re-persisted in full after
//! every mutation; there is no delta persistence and no cached total.

use tracing::instrument;

use bestcakes_core::{Price, ProductId};

use crate::error::{ValidationError, require_non_empty};
use crate::models::{Cart, CartLineItem, OrderForm, Product, storage_keys};
use crate::storage::Storage;

/// Owner of the cart state.
///
/// The shell never mutates the cart directly; it calls the operations here
/// and re-reads [`CartStore::items`] afterwards.
pub struct CartStore<S: Storage> {
    storage: S,
    cart: Cart,
}

impl<S: Storage> CartStore<S> {
    /// Create a store with an empty in-memory cart.
    ///
    /// Call [`CartStore::load`] to hydrate from storage.
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            cart: Cart::new(),
        }
    }

    /// Create a store and immediately hydrate it from storage.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Re-hydrate from the persisted record.
    ///
    /// Called whenever the cart surface becomes visible. An absent or
    /// malformed record yields an empty cart; this never fails to the
    /// caller.
    #[instrument(skip(self))]
    pub fn load(&mut self) {
        self.cart = match self.storage.get(storage_keys::CART) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(error = %e, "malformed cart record, starting empty");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };
    }

    /// Add `quantity` of `product`, merging into an existing line for the
    /// same product id.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        self.cart.add(product, quantity);
        self.persist();
    }

    /// Remove the line item with `id`. Absent ids are a no-op.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) {
        self.cart.remove(id);
        self.persist();
    }

    /// Apply `delta` to the quantity of the line item with `id`, flooring
    /// at 1. Absent ids are a no-op.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) {
        self.cart.update_quantity(id, delta);
        self.persist();
    }

    /// Empty the cart and delete the persisted record entirely.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.storage.remove(storage_keys::CART) {
            tracing::warn!(error = %e, "failed to delete cart record");
        }
    }

    /// Place the order described by `form` and clear the cart.
    ///
    /// There is no server to contact: a valid form is the whole checkout.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `name`, `phone` or `address` is
    /// empty; the cart is left unchanged.
    #[instrument(skip(self, form))]
    pub fn checkout(&mut self, form: &OrderForm) -> Result<(), ValidationError> {
        require_non_empty(&[
            ("name", &form.name),
            ("phone", &form.phone),
            ("address", &form.address),
        ])?;
        self.clear();
        Ok(())
    }

    /// Derived total: `Σ price × quantity`, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Snapshot of the line items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    /// Number of distinct line items (the cart badge count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // Durability is best-effort: a failed write leaves the in-memory cart
    // authoritative and is only logged.
    fn persist(&self) {
        match serde_json::to_string(&self.cart) {
            Ok(encoded) => {
                if let Err(e) = self.storage.put(storage_keys::CART, &encoded) {
                    tracing::warn!(error = %e, "failed to persist cart");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode cart"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Торт {id}"),
            price: Price::new(price),
            image: String::new(),
            category: String::new(),
            description: String::new(),
            weight: String::new(),
            ingredients: Vec::new(),
        }
    }

    fn valid_form() -> OrderForm {
        OrderForm {
            name: "Анна".to_owned(),
            phone: "+7 900 000-00-00".to_owned(),
            address: "ул. Ленина, 1".to_owned(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_add_twice_merges_and_totals() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.add_item(&product(1, 2500), 1);
        store.add_item(&product(1, 2500), 2);

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].quantity, 3);
        assert_eq!(store.total(), Price::new(7500));
    }

    #[test]
    fn test_mutations_survive_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::new(Arc::clone(&storage));
        store.add_item(&product(1, 2500), 2);
        store.add_item(&product(2, 1200), 1);

        let reloaded = CartStore::open(storage);
        assert_eq!(reloaded.items(), store.items());
        assert_eq!(reloaded.total(), Price::new(6200));
    }

    #[test]
    fn test_reload_without_mutation_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::new(Arc::clone(&storage));
        store.add_item(&product(1, 2500), 1);
        let snapshot = store.items().to_vec();

        for _ in 0..5 {
            store.load();
            assert_eq!(store.items(), snapshot.as_slice());
        }
    }

    #[test]
    fn test_clear_deletes_persisted_record() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::new(Arc::clone(&storage));
        store.add_item(&product(1, 2500), 1);
        assert!(storage.get(storage_keys::CART).is_some());

        store.clear();
        assert!(storage.get(storage_keys::CART).is_none());

        store.load();
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_record_loads_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.put(storage_keys::CART, "not json").unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn test_update_quantity_floor_and_noop() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.add_item(&product(1, 2500), 3);

        store.update_quantity(ProductId::new(1), -1000);
        assert_eq!(store.items()[0].quantity, 1);

        let before = store.items().to_vec();
        store.update_quantity(ProductId::new(5), -1);
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.add_item(&product(1, 2500), 1);
        let before = store.items().to_vec();

        store.remove_item(ProductId::new(9));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_checkout_clears_cart_and_record() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::new(Arc::clone(&storage));
        store.add_item(&product(1, 2500), 1);

        store.checkout(&valid_form()).unwrap();
        assert!(store.is_empty());
        assert!(storage.get(storage_keys::CART).is_none());
    }

    #[test]
    fn test_checkout_rejects_missing_fields() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.add_item(&product(1, 2500), 1);

        let mut form = valid_form();
        form.phone = String::new();
        form.address = String::new();

        let err = store.checkout(&form).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields {
                missing: vec!["phone", "address"],
            }
        );
        // Failed validation leaves the cart untouched.
        assert_eq!(store.len(), 1);
    }
}
