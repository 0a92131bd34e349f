//! Stores owning the client-side state.
//!
//! # Services
//!
//! - `cart` - Cart store (persisted under the `"cart"` record)
//! - `session` - Mock session store (persisted under the `"user"` record)
//! - `orders` - Read-only order history

pub mod cart;
pub mod orders;
pub mod session;

pub use cart::CartStore;
pub use session::SessionStore;
