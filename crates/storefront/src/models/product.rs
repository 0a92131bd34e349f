//! Product reference passed into cart operations.

use serde::{Deserialize, Serialize};

use bestcakes_core::{Price, ProductId};

/// A product as supplied by the static catalog.
///
/// The cart copies `name`, `image` and `price` into its line items at add
/// time; the extended fields (`description`, `weight`, `ingredients`) are
/// display-only and never enter the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub description: String,
    pub weight: String,
    pub ingredients: Vec<String>,
}
