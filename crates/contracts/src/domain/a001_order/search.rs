use super::aggregate::Order;

/// Normalized search text for the order list.
///
/// Matching is a case-insensitive substring test against the customer name
/// or phone. An empty query matches every order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.0.is_empty() {
            return true;
        }
        order.name.to_lowercase().contains(&self.0) || order.phone.to_lowercase().contains(&self.0)
    }
}

/// Orders matching `query`, each paired with its position in `orders`.
///
/// Positions always refer to the unfiltered list, which is the index space
/// the backend uses for `/complete/{index}` and `/delete/{index}`.
pub fn filter_orders<'a>(orders: &'a [Order], query: &SearchQuery) -> Vec<(usize, &'a Order)> {
    orders
        .iter()
        .enumerate()
        .filter(|(_, order)| query.matches(order))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(name: &str, phone: &str) -> Order {
        Order {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("John Smith", "555-1000"),
            order("Alice", "555-2000"),
            order("Sara SMITHERS", "777-0000"),
        ]
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let orders = sample();
        let upper: Vec<usize> = filter_orders(&orders, &SearchQuery::new("SMITH"))
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        let lower: Vec<usize> = filter_orders(&orders, &SearchQuery::new("smith"))
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(upper, lower);
        assert_eq!(upper, vec![0, 2]);
    }

    #[test]
    fn test_query_matches_phone() {
        let orders = sample();
        let hits = filter_orders(&orders, &SearchQuery::new("555-10"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.name, "John Smith");
    }

    #[test]
    fn test_blank_query_matches_all() {
        let orders = sample();
        assert!(SearchQuery::new("   ").is_empty());
        assert_eq!(filter_orders(&orders, &SearchQuery::new("  ")).len(), 3);
    }

    #[test]
    fn test_positions_refer_to_full_list() {
        let orders = sample();
        let hits = filter_orders(&orders, &SearchQuery::new("777"));
        assert_eq!(hits, vec![(2, &orders[2])]);
    }

    #[test]
    fn test_no_match() {
        let orders = sample();
        assert!(filter_orders(&orders, &SearchQuery::new("zzz")).is_empty());
    }
}
