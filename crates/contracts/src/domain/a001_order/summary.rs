use super::aggregate::Order;

/// Counts shown on the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let total = orders.len();
        let completed = orders.iter().filter(|o| o.is_completed()).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::OrderStatus;

    fn with_status(status: OrderStatus) -> Order {
        Order {
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_add_up() {
        let orders = vec![
            with_status(OrderStatus::Pending),
            with_status(OrderStatus::Completed),
            with_status(OrderStatus::Pending),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.pending + summary.completed, summary.total);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(OrderSummary::from_orders(&[]), OrderSummary::default());
    }
}
