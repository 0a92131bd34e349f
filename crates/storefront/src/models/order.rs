//! Past order record.

use serde::{Deserialize, Serialize};

use bestcakes_core::{OrderId, OrderStatus, Price};

/// A past order shown in the profile view.
///
/// Read-only in this core: order management lives in an external service,
/// so no mutation or status transitions are defined here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Display date (e.g., `"15.11.2024"`); never used for arithmetic.
    pub date: String,
    /// Names of the ordered items, in order.
    pub items: Vec<String>,
    pub total: Price,
    pub status: OrderStatus,
}
