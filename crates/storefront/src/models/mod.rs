//! Domain models for the storefront state core.
//!
//! These are validated domain objects; persistence encoding lives with the
//! stores, not here.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartLineItem};
pub use order::Order;
pub use product::Product;
pub use user::{OrderForm, UserProfile};

/// Keys for the durable key-value records.
pub mod storage_keys {
    /// Serialized ordered sequence of cart line items.
    pub const CART: &str = "cart";
    /// Serialized user profile.
    pub const USER: &str = "user";
}
