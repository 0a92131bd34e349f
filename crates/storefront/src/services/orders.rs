//! Read-only order history.
//!
//! Static sample data: order management lives in an external service, so
//! this core only presents a fixed list alongside the profile view.

use bestcakes_core::{OrderId, OrderStatus, Price};

use crate::models::Order;

/// Past orders for the profile view, newest first.
#[must_use]
pub fn history() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new(1),
            date: "15.11.2024".to_owned(),
            items: vec!["Шоколадный Торт".to_owned()],
            total: Price::new(2500),
            status: OrderStatus::Completed,
        },
        Order {
            id: OrderId::new(2),
            date: "10.11.2024".to_owned(),
            items: vec![
                "Чизкейк с Апельсином".to_owned(),
                "Торт с Малиной".to_owned(),
            ],
            total: Price::new(4700),
            status: OrderStatus::Pending,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_static() {
        assert_eq!(history(), history());
        assert_eq!(history().len(), 2);
    }

    #[test]
    fn test_sample_orders() {
        let orders = history();
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[0].total, Price::new(2500));
        assert_eq!(orders[1].status, OrderStatus::Pending);
        assert_eq!(orders[1].items.len(), 2);
    }
}
